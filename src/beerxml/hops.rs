use super::fields::percentage;
use super::handler::{ListHandler, RecordMapping};
use super::literals::{HopForms, HopTypes, LiteralTable};
use crate::error::ImportResult;
use crate::model::Hop;

/// Field rules for `<hop>` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopMapping;

pub type HopsHandler = ListHandler<HopMapping>;

impl RecordMapping for HopMapping {
    type Record = Hop;
    type Output = Hop;
    const CONTAINER: &'static str = "hops";
    const ELEMENT: &'static str = "hop";

    fn apply(&self, hop: &mut Hop, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => hop.name = text.to_string(),
            "type" => hop.hop_type = HopTypes::from_beerxml(text)?,
            "form" => hop.form = HopForms::from_beerxml(text)?,
            "origin" => hop.origin = text.to_string(),
            "notes" => hop.description = text.to_string(),
            "substitutes" => hop.substitutes = text.to_string(),
            "alpha" => hop.alpha_acid = percentage(field, text)?,
            "beta" => hop.beta_acid = percentage(field, text)?,
            "hsi" => hop.hop_stability_index = percentage(field, text)?,
            "humulene" => hop.humulene = percentage(field, text)?,
            "caryophyllene" => hop.caryophyllene = percentage(field, text)?,
            "cohumulone" => hop.cohumulone = percentage(field, text)?,
            "myrcene" => hop.myrcene = percentage(field, text)?,
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, hop: Hop) -> ImportResult<Hop> {
        Ok(hop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::handler::run_handler;
    use crate::model::{HopForm, HopType};

    #[test]
    fn test_parses_hop() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <HOPS>
              <HOP>
                <NAME>Cascade</NAME>
                <VERSION>1</VERSION>
                <ALPHA>5.5</ALPHA>
                <TYPE>Both</TYPE>
                <FORM>Leaf</FORM>
                <ORIGIN>US</ORIGIN>
                <MYRCENE>50</MYRCENE>
              </HOP>
            </HOPS>"#;
        let mut handler = HopsHandler::new(HopMapping);
        run_handler(xml, &mut handler).unwrap();
        let hops = handler.into_results();

        assert_eq!(hops.len(), 1);
        let hop = &hops[0];
        assert_eq!(hop.name, "Cascade");
        assert_eq!(hop.hop_type, HopType::Both);
        assert_eq!(hop.form, HopForm::Leaf);
        assert!((hop.alpha_acid.value() - 0.055).abs() < 1e-12);
        assert!((hop.myrcene.value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_hop_type_is_fatal() {
        let xml = "<HOPS><HOP><NAME>X</NAME><TYPE>Noble</TYPE></HOP></HOPS>";
        let mut handler = HopsHandler::new(HopMapping);
        let err = run_handler(xml, &mut handler).unwrap_err();
        assert!(err.to_string().contains("Noble"));
    }
}
