/// Literals used when a list is turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Placed between every two consecutive elements.
    pub delimiter: String,
    /// The only token produced for a list with no cells.
    pub empty: String,
}

pub const DEFAULT_DELIMITER: &str = " -> ";
pub const DEFAULT_EMPTY: &str = "List is empty";

impl RenderStyle {
    pub fn new(delimiter: &str, empty: &str) -> RenderStyle {
        RenderStyle {
            delimiter: delimiter.to_string(),
            empty: empty.to_string(),
        }
    }
}

impl Default for RenderStyle {
    fn default() -> RenderStyle {
        RenderStyle::new(DEFAULT_DELIMITER, DEFAULT_EMPTY)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        let style = RenderStyle::default();

        assert_eq!(style.delimiter, " -> ");
        assert_eq!(style.empty, "List is empty");
    }

    #[test]
    fn test_custom() {
        let style = RenderStyle::new(", ", "<none>");

        assert_eq!(style.delimiter, ", ");
        assert_eq!(style.empty, "<none>");
        assert_ne!(style, RenderStyle::default());
    }
}
