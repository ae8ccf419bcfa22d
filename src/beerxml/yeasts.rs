use super::fields::{celsius, percentage, whole_number};
use super::handler::{ListHandler, RecordMapping};
use super::literals::{Flocculations, LiteralTable, YeastForms, YeastTypes};
use crate::error::ImportResult;
use crate::model::Yeast;

#[derive(Debug, Clone, Copy, Default)]
pub struct YeastMapping;

pub type YeastsHandler = ListHandler<YeastMapping>;

impl RecordMapping for YeastMapping {
    type Record = Yeast;
    type Output = Yeast;
    const CONTAINER: &'static str = "yeasts";
    const ELEMENT: &'static str = "yeast";

    fn apply(&self, yeast: &mut Yeast, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => yeast.name = text.to_string(),
            "type" => yeast.yeast_type = YeastTypes::from_beerxml(text)?,
            "form" => yeast.form = YeastForms::from_beerxml(text)?,
            "laboratory" => yeast.laboratory = text.to_string(),
            "product_id" => yeast.product_id = text.to_string(),
            "min_temperature" => yeast.min_temperature = Some(celsius(field, text)?),
            "max_temperature" => yeast.max_temperature = Some(celsius(field, text)?),
            "flocculation" => yeast.flocculation = Flocculations::from_beerxml(text)?,
            "attenuation" => yeast.attenuation = percentage(field, text)?,
            "notes" => yeast.description = text.to_string(),
            "best_for" => yeast.recommended_styles = text.to_string(),
            "max_reuse" => yeast.max_reuse = whole_number(field, text)?,
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, yeast: Yeast) -> ImportResult<Yeast> {
        Ok(yeast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::handler::run_handler;
    use crate::model::{Flocculation, YeastForm, YeastType};

    #[test]
    fn test_parses_yeast() {
        let xml = "<YEASTS><YEAST><NAME>Safale US-05</NAME><TYPE>Ale</TYPE><FORM>Dry</FORM>\
                   <LABORATORY>Fermentis</LABORATORY><FLOCCULATION>Very High</FLOCCULATION>\
                   <ATTENUATION>81</ATTENUATION><MIN_TEMPERATURE>15</MIN_TEMPERATURE>\
                   <MAX_REUSE>5</MAX_REUSE></YEAST></YEASTS>";
        let mut handler = YeastsHandler::new(YeastMapping);
        run_handler(xml, &mut handler).unwrap();
        let yeast = &handler.results()[0];

        assert_eq!(yeast.yeast_type, YeastType::Ale);
        assert_eq!(yeast.form, YeastForm::Dry);
        assert_eq!(yeast.flocculation, Flocculation::VeryHigh);
        assert!((yeast.attenuation.value() - 0.81).abs() < 1e-12);
        assert_eq!(yeast.min_temperature.map(|t| t.value()), Some(15.0));
        assert!(yeast.max_temperature.is_none());
        assert_eq!(yeast.max_reuse, 5);
    }
}
