use crate::cli::Cli;
use crate::services::assess;
use crate::services::config::Config;
use crate::services::output::print_one;
use crate::services::storage::audit;

pub fn handle_assess(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let report = assess::run_assessment(config);
    audit(
        "assess",
        serde_json::json!({"threat_level": report.threat_level, "status": report.status}),
    );
    print_one(cli.json, report, |r| {
        format!("{}\t{}%\t{} risk factors", r.status, r.threat_level, r.factors.len())
    })
}
