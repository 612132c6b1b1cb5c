use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

use u_timetable::catalog::Catalog;
use u_timetable::ga::{GaConfig, GaRunner};
use u_timetable::report::{write_fitness_csv, write_schedule};
use u_timetable::timetable::TimetableProblem;

const FITNESS_REPORT: &str = "best_fitness_scores_report.csv";
const SCHEDULE_REPORT: &str = "best_schedule.txt";

fn main() {
    env_logger::init();

    let problem = TimetableProblem::new(Catalog::standard());
    let config = GaConfig::default();

    let result = match GaRunner::run(&problem, &config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let Some(best) = result.best.as_ref() else {
        log::warn!("No generation ran; nothing to report.");
        return;
    };

    let catalog = problem.catalog();
    let written = write_schedule(io::stdout().lock(), catalog, best)
        .and_then(|_| {
            println!("Best Fitness Score: {}", result.best_fitness);
            File::create(FITNESS_REPORT)
        })
        .and_then(|f| write_fitness_csv(BufWriter::new(f), &result.fitness_history))
        .and_then(|_| File::create(SCHEDULE_REPORT))
        .and_then(|f| write_schedule(BufWriter::new(f), catalog, best));

    if let Err(e) = written {
        log::error!("Failed to write reports: {}", e);
        process::exit(1);
    }
    log::info!("Reports written to '{}' and '{}'.", FITNESS_REPORT, SCHEDULE_REPORT);
}
