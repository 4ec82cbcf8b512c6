//! Survey command implementation.

use super::{build_classifier, build_discoverer, load_corpus};
use crate::cli::SurveyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tokentrail_sweep::CorpusSurvey;

/// Execute the survey command.
pub fn execute_survey(args: SurveyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", survey_report(args, config, formatter)?);
    Ok(())
}

/// Survey the capture and format the report.
pub fn survey_report(args: SurveyArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let corpus = load_corpus(&args.har)?;
    let classifier = build_classifier(config, args.entropy_threshold)?;
    let discoverer = build_discoverer(config, classifier.clone(), args.entropy_threshold)?;

    let report = CorpusSurvey::new(classifier, discoverer).survey(&corpus);
    formatter.format_survey(&report)
}
