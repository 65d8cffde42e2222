use super::emit;
use crate::blm::parse;
use crate::cli::OutputArgs;
use crate::config::ModaConfig;
use crate::io::output::ParsedIdentifier;
use crate::io::Report;
use anyhow::Result;

pub fn parse_identifiers(ids: &[String]) -> Vec<ParsedIdentifier> {
    ids.iter()
        .map(|input| ParsedIdentifier {
            input: input.clone(),
            id: parse(Some(input.as_str())),
        })
        .collect()
}

pub fn handle_parse(ids: &[String], output: &OutputArgs, config: &ModaConfig) -> Result<()> {
    let parsed = parse_identifiers(ids);
    let unmatched = parsed.iter().filter(|p| !p.id.is_matched()).count();
    if unmatched > 0 {
        log::info!("{unmatched} of {} identifiers had no BLM pattern", parsed.len());
    }
    emit(&Report::Parsed(parsed), output, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers_keeps_input() {
        let parsed = parse_identifiers(&["b2_l3_m07".to_string(), "roof".to_string()]);
        assert_eq!(parsed[0].input, "b2_l3_m07");
        assert_eq!(parsed[0].id.raw, "B2L3M07");
        assert!(!parsed[1].id.is_matched());
    }
}
