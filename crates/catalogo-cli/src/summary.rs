use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalogo_cli::types::ConversionResult;
use catalogo_output::WrittenOutput;

pub fn print_summary(result: &ConversionResult) {
    println!("Entrada: {}", result.input.display());
    match &result.written {
        Some(WrittenOutput::Xlsx(path)) => println!("Saída: {}", path.display()),
        Some(WrittenOutput::Csv(path)) => println!("Saída (CSV): {}", path.display()),
        None => println!("Saída: nenhum arquivo gerado"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Métrica"), header_cell("Linhas")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Lidas"), Cell::new(result.stats.input_rows)]);
    table.add_row(vec![
        Cell::new("Convertidas"),
        Cell::new(result.stats.converted),
    ]);
    table.add_row(vec![
        Cell::new("Falhas"),
        count_cell(result.stats.failed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Descrições inferidas"),
        count_cell(result.stats.inferred_descriptions, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Descrições \"Produto N\""),
        count_cell(result.stats.placeholder_descriptions, Color::Yellow),
    ]);
    println!("{table}");

    print_failure_table(result);
}

fn print_failure_table(result: &ConversionResult) {
    if result.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Linha"), header_cell("Erro")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &result.failures {
        table.add_row(vec![
            Cell::new(failure.row),
            Cell::new(failure.message.clone()).fg(Color::Red),
        ]);
    }
    println!();
    println!("Linhas não convertidas:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
