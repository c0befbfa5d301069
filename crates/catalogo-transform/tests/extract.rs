use catalogo_map::resolve;
use catalogo_model::CellValue;
use catalogo_transform::{DescriptionSource, Extractor, NumberFormat};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn description_comes_from_the_resolved_column_first() {
    let headers = headers(&["Código", "Descrição", "Nome"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![text("123"), text("Parafuso"), text("Outro nome")];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.description, "Parafuso");
    assert_eq!(extracted.description_source, DescriptionSource::Column);
}

#[test]
fn synonym_named_column_fills_a_blank_description() {
    // "Descrição" resolves but is blank; "Mercadoria" is a known synonym name.
    let headers = headers(&["Código", "Descrição", "Mercadoria"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![text("123"), CellValue::Empty, text("Parafuso sextavado")];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.description, "Parafuso sextavado");
    assert_eq!(extracted.description_source, DescriptionSource::SynonymScan);
}

#[test]
fn exhaustive_scan_prefers_the_longest_qualifying_value() {
    // Neither free-text column name matches a known synonym.
    let headers = headers(&["Código", "Obs1", "Obs2"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![text("123"), text("AB"), text("Blue Widget")];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.description, "Blue Widget");
    assert_eq!(extracted.description_source, DescriptionSource::ExhaustiveScan);
}

#[test]
fn exhaustive_scan_skips_code_price_and_unit_columns() {
    let headers = headers(&["Código", "Cod Barras", "Preço Tabela", "Unid Medida"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    // Every candidate column is excluded by name, the code has no spaces:
    // the placeholder tier must fire.
    let row = vec![text("123"), text("7891234567"), text("dez reais"), text("unidade")];
    let extracted = extractor.extract(&row, 2);
    assert_eq!(extracted.description, "Produto 3");
    assert_eq!(extracted.description_source, DescriptionSource::Placeholder);
}

#[test]
fn composite_code_splits_into_code_and_description() {
    let headers = headers(&["Código", "Preço Varejo"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![text("123 Parafuso Phillips"), text("10,50")];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.code, "123");
    assert_eq!(extracted.description, "Parafuso Phillips");
    assert_eq!(extracted.description_source, DescriptionSource::CodeSplit);
    assert_eq!(extracted.retail_price, Some(10.5));
}

#[test]
fn placeholder_uses_the_one_based_row_position() {
    let headers = headers(&["Código"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let extracted = extractor.extract(&[text("123")], 41);
    assert_eq!(extracted.description, "Produto 42");
}

#[test]
fn numeric_fields_default_and_degrade() {
    let headers = headers(&["Código", "Descrição", "Preço Varejo", "Estoque", "Preço Atacado"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![
        text("1"),
        text("Item"),
        text("1.234,56"),
        text("abc"),
        CellValue::Empty,
    ];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.retail_price, Some(1234.56));
    // Present but unparseable falls back to the configured default.
    assert_eq!(extracted.stock, Some(0.0));
    // Unresolved or blank stays unset.
    assert_eq!(extracted.wholesale_price, None);
    assert_eq!(extracted.promo_price, None);
}

#[test]
fn numeric_cells_pass_through_unparsed() {
    let headers = headers(&["Código", "Descrição", "Preço Varejo"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![text("1"), text("Item"), CellValue::Number(10.5)];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.retail_price, Some(10.5));
}

#[test]
fn numeric_product_codes_coerce_to_clean_text() {
    let headers = headers(&["Código", "Descrição"]);
    let colmap = resolve(&headers);
    let extractor = Extractor::new(&headers, &colmap, NumberFormat::brazilian());

    let row = vec![CellValue::Number(123.0), text("Parafuso")];
    let extracted = extractor.extract(&row, 0);
    assert_eq!(extracted.code, "123");
}
