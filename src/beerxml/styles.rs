use super::fields::{number, percentage};
use super::handler::{ListHandler, RecordMapping};
use super::literals::{LiteralTable, StyleTypes};
use crate::error::ImportResult;
use crate::model::{Bitterness, Carbonation, Colour, Density, Style};

/// Field rules for `<style>` records. `<name>` is the style's name within
/// its guide; the unique name is assigned when the record closes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleMapping;

pub type StylesHandler = ListHandler<StyleMapping>;

impl RecordMapping for StyleMapping {
    type Record = Style;
    type Output = Style;
    const CONTAINER: &'static str = "styles";
    const ELEMENT: &'static str = "style";

    fn apply(&self, style: &mut Style, field: &str, text: &str) -> ImportResult<()> {
        let value = || number(field, text);
        match field {
            "name" => style.style_guide_name = text.to_string(),
            "category" => style.category = text.to_string(),
            "category_number" => style.category_number = text.to_string(),
            "style_letter" => style.style_letter = text.to_string(),
            "style_guide" => style.style_guide = text.to_string(),
            "type" => style.style_type = StyleTypes::from_beerxml(text)?,
            "og_min" => style.og_min = Density::new(value()?),
            "og_max" => style.og_max = Density::new(value()?),
            "fg_min" => style.fg_min = Density::new(value()?),
            "fg_max" => style.fg_max = Density::new(value()?),
            "ibu_min" => style.ibu_min = Bitterness::new(value()?),
            "ibu_max" => style.ibu_max = Bitterness::new(value()?),
            "color_min" => style.colour_min = Colour::srm(value()?),
            "color_max" => style.colour_max = Colour::srm(value()?),
            "carb_min" => style.carbonation_min = Carbonation::new(value()?),
            "carb_max" => style.carbonation_max = Carbonation::new(value()?),
            "abv_min" => style.abv_min = percentage(field, text)?,
            "abv_max" => style.abv_max = percentage(field, text)?,
            "notes" => style.notes = text.to_string(),
            "profile" => style.profile = text.to_string(),
            "ingredients" => style.ingredients = text.to_string(),
            "examples" => style.examples = text.to_string(),
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, mut style: Style) -> ImportResult<Style> {
        style.assign_identity();
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::handler::run_handler;
    use crate::model::StyleType;

    fn parse(xml: &str) -> Vec<Style> {
        let mut handler = StylesHandler::new(StyleMapping);
        run_handler(xml, &mut handler).unwrap();
        handler.into_results()
    }

    #[test]
    fn test_identity_independent_of_field_order() {
        let forward = parse(
            "<STYLES><STYLE><NAME>American Light Lager</NAME><CATEGORY_NUMBER>1</CATEGORY_NUMBER>\
             <STYLE_LETTER>A</STYLE_LETTER><STYLE_GUIDE>BJCP</STYLE_GUIDE><TYPE>Lager</TYPE>\
             </STYLE></STYLES>",
        );
        let reversed = parse(
            "<STYLES><STYLE><TYPE>Lager</TYPE><STYLE_GUIDE>BJCP</STYLE_GUIDE>\
             <STYLE_LETTER>A</STYLE_LETTER><CATEGORY_NUMBER>1</CATEGORY_NUMBER>\
             <NAME>American Light Lager</NAME></STYLE></STYLES>",
        );

        for style in [&forward[0], &reversed[0]] {
            assert_eq!(style.name, "1A/American Light Lager/BJCP");
            assert_eq!(style.display_name, "1A American Light Lager");
            assert_eq!(style.style_type, StyleType::Lager);
        }
    }

    #[test]
    fn test_abv_bounds_are_fractions() {
        let styles = parse(
            "<STYLES><STYLE><NAME>Dry Stout</NAME><ABV_MIN>4</ABV_MIN><ABV_MAX>5</ABV_MAX>\
             <OG_MIN>1.036</OG_MIN></STYLE></STYLES>",
        );
        assert!((styles[0].abv_min.value() - 0.04).abs() < 1e-12);
        assert!((styles[0].abv_max.value() - 0.05).abs() < 1e-12);
        assert_eq!(styles[0].og_min.value(), 1.036);
    }
}
