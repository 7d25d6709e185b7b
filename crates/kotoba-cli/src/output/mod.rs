use kotoba_core::entities::UserProgress;
use kotoba_core::enums::CounterKind;
use kotoba_core::responses::RandomSetResponse;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

const MAX_CELL: usize = 48;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a progress document; table mode lists the vocabulary with counters.
pub fn output_progress(progress: &UserProgress, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_vocabulary(progress));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(progress, format),
    }
}

/// Print a random-set result: the whole response as JSON, or the sampled
/// vocabulary as a table.
pub fn output_random(response: &RandomSetResponse, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_random(response, format)?);
    Ok(())
}

fn render_random(response: &RandomSetResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_vocabulary(&response.progress)),
        OutputFormat::Json | OutputFormat::Raw => render(response, format),
    }
}

fn render_vocabulary(progress: &UserProgress) -> String {
    if progress.vocabulary.is_empty() {
        return String::from("(no words)");
    }
    let rows: Vec<Vec<String>> = progress
        .vocabulary
        .iter()
        .map(|word| {
            vec![
                word.id.clone(),
                word.headword.clone(),
                word.fields.join(" / "),
                progress.count(CounterKind::Correct, &word.headword).to_string(),
                progress.count(CounterKind::Incorrect, &word.headword).to_string(),
                word.origin_set.clone().unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    table::render_table(
        &["id", "headword", "fields", "correct", "incorrect", "set"],
        &rows,
        MAX_CELL,
    )
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let rendered = match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let rows: Vec<Vec<String>> = items.iter().map(|item| vec![value_to_cell(item)]).collect();
            table::render_table(&["value"], &rows, MAX_CELL)
        }
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            table::render_table(&["key", "value"], &rows, MAX_CELL)
        }
        scalar => value_to_cell(scalar),
    };
    Ok(rendered)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
