//! Implementation of the `rubric list` command.

use crate::cli::ListArgs;
use rubric::error::Result;
use rubric::exit_codes;
use rubric::lesson::load_dir;

/// Execute the `rubric list` command.
///
/// One line per lesson in deterministic (file name) order.
pub fn cmd_list(args: ListArgs) -> Result<i32> {
    let lessons = load_dir(&args.dir)?;

    if lessons.is_empty() {
        println!("No lessons found in '{}'.", args.dir.display());
        return Ok(exit_codes::SUCCESS);
    }

    for (name, lesson) in &lessons {
        let practice = match &lesson.validation_criteria {
            Some(criteria) => format!("{} rule(s)", criteria.rule_count()),
            None => "no practice".to_string(),
        };
        println!("  {}  {}  [{}]", name, lesson.title, practice);
    }

    println!();
    let gradable = lessons.iter().filter(|(_, l)| l.is_gradable()).count();
    println!("{} lesson(s), {} gradable.", lessons.len(), gradable);

    Ok(exit_codes::SUCCESS)
}
