use anyhow::Result;
use monthview_core::{CalEvent, MonthView, MonthViewParams};

use crate::render;

pub fn run(
    params: &MonthViewParams,
    events: &[CalEvent],
    max_per_day: usize,
    json: bool,
) -> Result<()> {
    let view = MonthView::build(params, events);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let today = params.now.with_timezone(&params.timezone).date_naive();
    println!("{}", render::render_grid(&view, today, max_per_day));

    Ok(())
}
