use crate::output::Output;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use flixfinder_models::Mood;
use serde_json::json;

pub fn run_moods(output: &Output) -> Result<()> {
    if !output.is_human() {
        let moods: Vec<serde_json::Value> = Mood::ALL
            .iter()
            .map(|mood| {
                json!({
                    "mood": mood.label(),
                    "genre_id": mood.genre_id(),
                    "description": mood.description(),
                    "genres": mood.tagline(),
                })
            })
            .collect();
        output.json(&json!({ "type": "moods", "moods": moods }));
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Mood").add_attribute(Attribute::Bold),
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
        Cell::new("Genres").add_attribute(Attribute::Bold),
    ]);

    for mood in Mood::ALL {
        table.add_row(vec![
            Cell::new(format!("{} {}", mood.emoji(), mood.label())),
            Cell::new(mood.genre_id()),
            Cell::new(mood.description()),
            Cell::new(mood.tagline()),
        ]);
    }

    println!("{}", table);
    Ok(())
}
