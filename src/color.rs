/// Color palettes and hex validation.
use crate::error::FlickerError;

/// The built-in cyberpunk palette.
pub const CYBERPUNK: &[&str] = &[
    "#9a154c", "#f64d54", "#118171", "#f5a439", "#031efd", "#811278", "#4f3b78", "#cc168d",
    "#caff01", "#06b7ff", "#ff0182", "#01ff11", "#00ffec", "#a403ff", "#be00fe", "#38fbdb",
    "#fc11f5", "#8f52f5", "#fdfe00", "#00ffa0", "#00ffd3", "#afff01", "#fd01f3", "#e301ff",
    "#d600fe",
];

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// An ordered, immutable set of selectable colors.
///
/// Every entry is a validated `#RRGGBB` string. The palette may be empty;
/// it is up to the consumer to reject that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, FlickerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors
            .into_iter()
            .map(Into::into)
            .map(|color: String| {
                if is_valid_hex(&color) {
                    Ok(color)
                } else {
                    Err(FlickerError::InvalidColor(color))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn cyberpunk() -> Self {
        Self {
            colors: CYBERPUNK.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Parses a comma-separated list such as `#ff0000, #00ff00`.
    pub fn parse(list: &str) -> Result<Self, FlickerError> {
        Self::new(list.split(',').map(str::trim).filter(|c| !c.is_empty()))
    }

    pub fn is_cyberpunk(&self) -> bool {
        self.iter().eq(CYBERPUNK.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#9a154c", true)]
    #[case("#ABCDEF", true)]
    #[case("9a154c", false)]
    #[case("#9a154", false)]
    #[case("#9a154cc", false)]
    #[case("#zz154c", false)]
    #[case("bg-[#9a154c]", false)]
    fn hex_validation(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_valid_hex(input), valid);
    }

    #[test]
    fn cyberpunk_palette_is_valid() {
        let palette = Palette::cyberpunk();
        assert_eq!(palette.len(), 25);
        assert!(palette.is_cyberpunk());
        assert!(palette.iter().all(is_valid_hex));
        assert_eq!(Palette::new(CYBERPUNK.iter().copied()), Ok(palette));
    }

    #[test]
    fn parse_trims_and_skips_empty_entries() {
        let palette = Palette::parse(" #ff0000,#00ff00 ,, #0000ff ").unwrap();
        assert_eq!(
            palette.iter().collect::<Vec<_>>(),
            vec!["#ff0000", "#00ff00", "#0000ff"]
        );
        assert!(palette.contains("#00ff00"));
        assert!(!palette.is_cyberpunk());
        assert!(!palette.contains("#ffffff"));
        assert_eq!(palette.get(2), Some("#0000ff"));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn parse_rejects_bad_color() {
        assert_eq!(
            Palette::parse("#ff0000,red"),
            Err(FlickerError::InvalidColor("red".to_string()))
        );
    }

    #[test]
    fn empty_list_gives_empty_palette() {
        let palette = Palette::parse("").unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
    }
}
