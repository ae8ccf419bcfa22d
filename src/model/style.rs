use super::quantity::{Bitterness, Carbonation, Colour, Density, Percentage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StyleType {
    Lager,
    #[default]
    Ale,
    Mead,
    Wheat,
    Mixed,
    Cider,
}

/// A beer style from a style guide.
///
/// `name` is the unique key `{category number}{style letter}/{style guide
/// name}/{style guide}` and `display_name` is `{category number}{style
/// letter} {style guide name}`. Both are only known once every sub-field has
/// been read, see [`Style::assign_identity`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub display_name: String,
    /// The style's own name within its guide, e.g. "American Light Lager".
    pub style_guide_name: String,
    pub category: String,
    pub category_number: String,
    pub style_letter: String,
    pub style_guide: String,
    pub style_type: StyleType,
    pub og_min: Density,
    pub og_max: Density,
    pub fg_min: Density,
    pub fg_max: Density,
    pub ibu_min: Bitterness,
    pub ibu_max: Bitterness,
    pub colour_min: Colour,
    pub colour_max: Colour,
    pub carbonation_min: Carbonation,
    pub carbonation_max: Carbonation,
    pub abv_min: Percentage,
    pub abv_max: Percentage,
    pub notes: String,
    pub profile: String,
    pub ingredients: String,
    pub examples: String,
}

impl Style {
    pub fn assign_identity(&mut self) {
        let code = format!("{}{}", self.category_number, self.style_letter);
        self.name = format!("{}/{}/{}", code, self.style_guide_name, self.style_guide);
        self.display_name = format!("{} {}", code, self.style_guide_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let mut style = Style {
            category_number: "1".to_string(),
            style_letter: "A".to_string(),
            style_guide_name: "American Light Lager".to_string(),
            style_guide: "BJCP".to_string(),
            ..Default::default()
        };
        style.assign_identity();
        assert_eq!(style.name, "1A/American Light Lager/BJCP");
        assert_eq!(style.display_name, "1A American Light Lager");
    }

    #[test]
    fn test_identity_without_letter() {
        let mut style = Style {
            category_number: "27".to_string(),
            style_guide_name: "Historical Beer".to_string(),
            style_guide: "BJCP 2015".to_string(),
            ..Default::default()
        };
        style.assign_identity();
        assert_eq!(style.name, "27/Historical Beer/BJCP 2015");
        assert_eq!(style.display_name, "27 Historical Beer");
    }
}
