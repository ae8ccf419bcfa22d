use super::fields::minutes;
use super::handler::{ListHandler, RecordMapping};
use super::literals::{LiteralTable, MiscTypes, MiscUses};
use crate::error::ImportResult;
use crate::model::Misc;

#[derive(Debug, Clone, Copy, Default)]
pub struct MiscMapping;

pub type MiscsHandler = ListHandler<MiscMapping>;

impl RecordMapping for MiscMapping {
    type Record = Misc;
    type Output = Misc;
    const CONTAINER: &'static str = "miscs";
    const ELEMENT: &'static str = "misc";

    fn apply(&self, misc: &mut Misc, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => misc.name = text.to_string(),
            "type" => misc.misc_type = MiscTypes::from_beerxml(text)?,
            "use" => misc.default_use = Some(MiscUses::from_beerxml(text)?),
            "time" => misc.default_time = Some(minutes(field, text)?),
            "use_for" => misc.usage = text.to_string(),
            "notes" => misc.description = text.to_string(),
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, misc: Misc) -> ImportResult<Misc> {
        Ok(misc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::handler::run_handler;
    use crate::error::ImportError;
    use crate::model::{MiscType, MiscUse};

    #[test]
    fn test_parses_misc() {
        let xml = "<MISCS><MISC><NAME>Irish Moss</NAME><TYPE>Fining</TYPE><USE>Boil</USE>\
                   <TIME>15</TIME><USE_FOR>Clarity</USE_FOR></MISC>\
                   <MISC><NAME>Orange Peel</NAME><TYPE>flavor</TYPE></MISC></MISCS>";
        let mut handler = MiscsHandler::new(MiscMapping);
        run_handler(xml, &mut handler).unwrap();
        let miscs = handler.into_results();

        assert_eq!(miscs[0].misc_type, MiscType::Fining);
        assert_eq!(miscs[0].default_use, Some(MiscUse::Boil));
        assert_eq!(miscs[0].default_time.map(|t| t.value()), Some(15.0));
        assert_eq!(miscs[0].usage, "Clarity");
        assert_eq!(miscs[1].misc_type, MiscType::Flavour);
        assert!(miscs[1].default_use.is_none());
    }

    #[test]
    fn test_unknown_use_is_fatal() {
        let xml = "<MISCS><MISC><NAME>X</NAME><USE>Kegging</USE></MISC></MISCS>";
        let mut handler = MiscsHandler::new(MiscMapping);
        assert!(matches!(
            run_handler(xml, &mut handler),
            Err(ImportError::UnknownLiteral { field: "misc use", .. })
        ));
    }
}
