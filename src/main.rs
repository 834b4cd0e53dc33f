use std::process::ExitCode;

use core_engine::engine;

fn main() -> ExitCode {
    match engine::run() {
        Ok(report) => {
            println!(
                "[CORE] {:?}: {} ticks, {} levels cleared, score {}",
                report.outcome, report.ticks, report.levels_cleared, report.score
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[CORE] {}", e);
            ExitCode::FAILURE
        }
    }
}
