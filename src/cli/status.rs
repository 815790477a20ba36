use crate::state::DocumentStateManager;
use crate::Result;
use colored::Colorize;

pub fn run(manager: &DocumentStateManager, json: bool) -> Result<()> {
    let fields = match manager.extract_fields(None) {
        Ok(fields) => fields,
        Err(err) => return super::report(err),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("{}", "📋 Project status".cyan().bold());
    println!();
    println!("   Project:      {}", fields.project);
    match &fields.progress {
        Some(progress) => println!("   Phase:        {} ({}%)", fields.phase, progress),
        None => println!(
            "   Phase:        {} {}",
            fields.phase,
            "(progress line not found)".yellow()
        ),
    }
    println!("   Architecture: {}", fields.architecture);
    println!("   Principles:   {}", fields.principles);
    println!();
    println!("{}", "🔨 Current task".cyan().bold());
    println!("   Task:         {}", fields.current_task.green());
    println!("   Criteria:     {}", fields.completion_criteria);
    println!("   Files:        {}", fields.working_files);
    println!("   Integration:  {}", fields.integration_points);
    println!();
    println!("{}", "📦 Progress".cyan().bold());
    println!("   Completed:    {}", fields.completed);
    println!("   Next:         {}", fields.next_tasks);
    println!("   Challenges:   {}", fields.challenges);
    println!("   Decisions:    {}", fields.decisions);

    Ok(())
}
