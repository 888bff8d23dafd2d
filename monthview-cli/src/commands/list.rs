use anyhow::Result;
use monthview_core::{CalEvent, MonthView, MonthViewParams};
use owo_colors::OwoColorize;

pub fn run(params: &MonthViewParams, events: &[CalEvent]) -> Result<()> {
    let view = MonthView::build(params, events);

    println!("{}", view.title.bold());
    println!();

    let mut printed = false;

    for day in &view.days {
        // Only the cursor month; overflow days belong to the adjacent views
        if view.is_overflow(*day) {
            continue;
        }

        let bucket = view.events_on(*day);
        if bucket.is_empty() {
            continue;
        }

        println!("{}", day.format("%a %b %-d").to_string().bold());
        for event in bucket {
            let time = if event.all_day {
                format!("{:>7}", "all-day")
            } else {
                format!(
                    "{:>7}",
                    event.start.with_timezone(&params.timezone).format("%H:%M")
                )
            };
            println!("  {} {}", time.dimmed(), event.title);
        }
        println!();
        printed = true;
    }

    if !printed {
        println!("{}", "No events found".dimmed());
    }

    Ok(())
}
