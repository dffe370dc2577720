//! CLI commands for corpus cleaning, analysis, and archived-run statistics

pub mod analyze;
pub mod clean;
pub mod stats;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    run::AnalysisRun,
};

/// Print the statistics report for a finished run.
///
/// Shared between `analyze` (fresh runs) and `stats` (archived runs).
pub(super) fn print_run_report(run: &AnalysisRun) {
    print_section("Corpus Summary");
    print_kv("Source", &run.config.source);
    print_kv("Games in corpus", &format_number(run.config.corpus_games));
    print_kv("Games analyzed", &format_number(run.config.sampled_games));
    if let Some(seed) = run.config.seed {
        print_kv("Seed", &seed.to_string());
    }
    match &run.lengths {
        Some(lengths) => {
            print_kv("Mean plies", &format!("{:.2}", lengths.mean_plies));
            print_kv("Median plies", &format!("{:.1}", lengths.median_plies));
            let modal = lengths
                .modal_plies
                .iter()
                .map(|(length, count)| format!("{length} (x{})", format_number(*count)))
                .collect::<Vec<_>>()
                .join(", ");
            print_kv("Modal plies", &modal);
        }
        None => print_kv("Plies", "no data"),
    }

    print_section("Tree Summary");
    match &run.tree {
        Some(tree) => {
            print_kv("Game states", &format_number(tree.total_records));
            print_kv("Forced states", &format_number(tree.forced_records));
            print_kv("Unforced states", &format_number(tree.unforced_records));
            print_kv("Mean replies", &format!("{:.3}", tree.mean_replies));
            match tree.mean_unforced_replies {
                Some(mean) => print_kv("Mean replies (unforced)", &format!("{mean:.3}")),
                None => print_kv("Mean replies (unforced)", "no data"),
            }
        }
        None => print_kv("States", "no data"),
    }
}
