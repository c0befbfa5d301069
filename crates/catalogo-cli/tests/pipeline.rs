use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

use catalogo_cli::pipeline::{ConversionRequest, run_conversion};
use catalogo_output::WrittenOutput;
use catalogo_transform::ConvertOptions;

fn write_fixture(path: &Path, headers: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (column, header) in headers.iter().enumerate() {
        sheet.write_string(0, column as u16, *header).unwrap();
    }
    for (index, row) in rows.iter().enumerate() {
        for (column, value) in row.iter().enumerate() {
            sheet
                .write_string((index + 1) as u32, column as u16, *value)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn read_output(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range("Produtos").unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn request(input: &Path, output: &Path, strict: bool) -> ConversionRequest {
    ConversionRequest {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        options: ConvertOptions {
            strict,
            ..ConvertOptions::default()
        },
        dump_colmap: false,
    }
}

#[test]
fn converts_a_sheet_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dados_atuais.xlsx");
    let output = dir.path().join("dados_convertidos.xlsx");
    write_fixture(
        &input,
        &["Código", "Preço Varejo", "Unidade"],
        &[&["123 Parafuso Phillips", "10,50", "UN"] as &[&str]],
    );

    let result = run_conversion(&request(&input, &output, false)).unwrap();
    assert_eq!(result.written, Some(WrittenOutput::Xlsx(output.clone())));
    assert!(!result.has_errors);
    assert_eq!(result.stats.input_rows, 1);
    assert_eq!(result.stats.converted, 1);
    assert_eq!(result.stats.failed, 0);
    // The description came from splitting the code on its first whitespace.
    assert_eq!(result.stats.inferred_descriptions, 1);
    assert!(result.stats.is_balanced());

    let rows = read_output(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], Data::Float(1.0)); // ID
    assert_eq!(rows[1][1], Data::String("123".to_string())); // Código
    assert_eq!(rows[1][2], Data::String("Parafuso Phillips".to_string())); // Descrição
    assert_eq!(rows[1][3], Data::String("UN".to_string())); // Unidade
    assert_eq!(rows[1][6], Data::Float(10.5)); // Preço
}

#[test]
fn strict_mode_skips_rows_with_empty_codes_and_keeps_original_ids() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entrada.xlsx");
    let output = dir.path().join("saida.xlsx");
    write_fixture(
        &input,
        &["Código", "Descrição"],
        &[&["", "Sem código"] as &[&str], &["9", "Martelo"]],
    );

    let result = run_conversion(&request(&input, &output, true)).unwrap();
    assert_eq!(result.stats.input_rows, 2);
    assert_eq!(result.stats.converted, 1);
    assert_eq!(result.stats.failed, 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].row, 1);
    assert!(!result.has_errors);

    let rows = read_output(&output);
    assert_eq!(rows.len(), 2);
    // The surviving row keeps its original sheet position as ID.
    assert_eq!(rows[1][0], Data::Float(2.0));
    assert_eq!(rows[1][1], Data::String("9".to_string()));
    assert_eq!(rows[1][2], Data::String("Martelo".to_string()));
}

#[test]
fn writes_nothing_when_every_row_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entrada.xlsx");
    let output = dir.path().join("saida.xlsx");
    write_fixture(
        &input,
        &["Código", "Descrição"],
        &[&["", "Sem código"] as &[&str]],
    );

    let result = run_conversion(&request(&input, &output, true)).unwrap();
    assert!(result.written.is_none());
    assert!(result.has_errors);
    assert_eq!(result.stats.failed, 1);
    assert!(!output.exists());
}

#[test]
fn an_input_with_no_data_rows_yields_a_headers_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entrada.xlsx");
    let output = dir.path().join("saida.xlsx");
    write_fixture(&input, &["Código", "Descrição"], &[]);

    let result = run_conversion(&request(&input, &output, false)).unwrap();
    assert_eq!(result.written, Some(WrittenOutput::Xlsx(output.clone())));
    assert_eq!(result.stats.input_rows, 0);

    let rows = read_output(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], Data::String("Código".to_string()));
}

#[test]
fn a_missing_input_file_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nao_existe.xlsx");
    let output = dir.path().join("saida.xlsx");

    let error = run_conversion(&request(&input, &output, false)).unwrap_err();
    assert!(error.to_string().contains("input file not found"));
}
