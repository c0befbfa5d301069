//! Assembly of the fixed-shape output record.

use thiserror::Error;

use catalogo_model::{CellValue, OutputRecord};

use crate::extract::ExtractedRecord;
use crate::numeric::{NumberFormat, format_number};

/// Row-level conversion failure. The row is skipped and counted; the run
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("row {row}: required field '{field}' is empty")]
    RequiredFieldMissing { row: usize, field: &'static str },
}

/// Conversion policy for a run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// When set, a row with an empty code fails instead of passing through.
    pub strict: bool,
    /// Locale convention for numeric cell parsing.
    pub number_format: NumberFormat,
}

/// Builds the full output record for one extracted row.
///
/// `row_index` is the zero-based original position; the `ID` column keeps the
/// 1-based original position even when earlier rows failed.
pub fn map_record(
    extracted: &ExtractedRecord,
    row_index: usize,
    options: &ConvertOptions,
) -> Result<OutputRecord, ConvertError> {
    if options.strict && extracted.code.trim().is_empty() {
        return Err(ConvertError::RequiredFieldMissing {
            row: row_index + 1,
            field: "Código",
        });
    }

    let cells = vec![
        CellValue::Number((row_index + 1) as f64),     // ID
        text(&extracted.code),                         // Código
        text(&extracted.description),                  // Descrição
        text(&extracted.unit),                         // Unidade
        text(&extracted.tax_classification),           // NCM
        CellValue::Empty,                              // Origem
        number(extracted.retail_price),                // Preço
        CellValue::Empty,                              // Valor IPI fixo
        composite(observations(extracted)),            // Observações
        CellValue::Empty,                              // Situação
        number(extracted.stock),                       // Estoque
        number(extracted.purchase_price),              // Preço de custo
        text(&extracted.original_code),                // Cód no fornecedor
        text(&extracted.supplier),                     // Fornecedor
        text(&extracted.address),                      // Localização
        CellValue::Empty,                              // Estoque maximo
        CellValue::Empty,                              // Estoque minimo
        CellValue::Empty,                              // Peso líquido (Kg)
        CellValue::Empty,                              // Peso bruto (Kg)
        CellValue::Empty,                              // GTIN/EAN
        CellValue::Empty,                              // GTIN/EAN da embalagem
        CellValue::Empty,                              // Largura do Produto
        CellValue::Empty,                              // Altura do Produto
        CellValue::Empty,                              // Profundidade do produto
        CellValue::Empty,                              // Data Validade
        CellValue::Empty,                              // Descrição do Produto no Fornecedor
        CellValue::Empty,                              // Descrição Complementar
        CellValue::Empty,                              // Itens p/ caixa
        CellValue::Empty,                              // Produto Variação
        CellValue::Empty,                              // Tipo Produção
        CellValue::Empty,                              // Classe de enquadramento do IPI
        CellValue::Empty,                              // Código da lista de serviços
        CellValue::Empty,                              // Tipo do item
        CellValue::Empty,                              // Grupo de Tags/Tags
        CellValue::Empty,                              // Tributos
        CellValue::Empty,                              // Código Pai
        CellValue::Empty,                              // Código Integração
        text(&extracted.group),                        // Grupo de produtos
        CellValue::Empty,                              // Marca
        CellValue::Empty,                              // CEST
        CellValue::Empty,                              // Volumes
        CellValue::Empty,                              // Descrição Curta
        CellValue::Empty,                              // Cross-Docking
        CellValue::Empty,                              // URL Imagens Externas
        CellValue::Empty,                              // Link Externo
        text(&extracted.warranty),                     // Meses Garantia no Fornecedor
        CellValue::Empty,                              // Clonar dados do pai
        CellValue::Empty,                              // Condição do produto
        CellValue::Empty,                              // Frete Grátis
        CellValue::Empty,                              // Número FCI
        CellValue::Empty,                              // Vídeo
        text(&extracted.product_line),                 // Departamento
        CellValue::Empty,                              // Unidade de medida
        number(extracted.purchase_price),              // Preço de compra
        CellValue::Empty,                              // Valor base ICMS ST para retenção
        CellValue::Empty,                              // Valor ICMS ST para retenção
        CellValue::Empty,                              // Valor ICMS próprio do substituto
        CellValue::Empty,                              // Categoria do produto
        composite(additional_info(extracted)),         // Informações Adicionais
    ];
    Ok(OutputRecord::new(cells))
}

fn text(value: &str) -> CellValue {
    if value.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value.trim().to_string())
    }
}

/// Composite fields keep their literal text, trailing space included; the
/// downstream importer parses them verbatim.
fn composite(value: String) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value)
    }
}

fn number(value: Option<f64>) -> CellValue {
    match value {
        Some(number) => CellValue::Number(number),
        None => CellValue::Empty,
    }
}

/// Wholesale and promo prices land in the observations column; the literal
/// text (trailing space before the `;` included) is part of the downstream
/// contract.
fn observations(extracted: &ExtractedRecord) -> String {
    let mut out = String::new();
    if let Some(wholesale) = extracted.wholesale_price {
        out.push_str(&format!("Preço atacado: {}; ", format_number(wholesale)));
    }
    if let Some(promo) = extracted.promo_price {
        out.push_str(&format!("Preço promoção: {}; ", format_number(promo)));
    }
    out
}

fn additional_info(extracted: &ExtractedRecord) -> String {
    let mut out = String::new();
    if !extracted.address2.is_empty() {
        out.push_str(&format!("Endereço 2: {}; ", extracted.address2));
    }
    if !extracted.pending.is_empty() {
        out.push_str(&format!("Pendência: {}; ", extracted.pending));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::DescriptionSource;
    use catalogo_model::OUTPUT_COLUMNS;

    fn sample() -> ExtractedRecord {
        ExtractedRecord {
            code: "123".to_string(),
            description: "Parafuso".to_string(),
            description_source: DescriptionSource::Column,
            unit: "UN".to_string(),
            tax_classification: String::new(),
            retail_price: Some(10.5),
            wholesale_price: None,
            promo_price: None,
            stock: None,
            purchase_price: None,
            original_code: String::new(),
            supplier: String::new(),
            address: String::new(),
            address2: String::new(),
            warranty: String::new(),
            pending: String::new(),
            product_line: String::new(),
            group: String::new(),
        }
    }

    #[test]
    fn record_covers_every_output_column() {
        let record = map_record(&sample(), 0, &ConvertOptions::default()).unwrap();
        assert_eq!(record.cells().len(), OUTPUT_COLUMNS.len());
    }

    #[test]
    fn strict_mode_rejects_empty_code() {
        let mut extracted = sample();
        extracted.code = String::new();

        let lenient = map_record(&extracted, 4, &ConvertOptions::default());
        assert!(lenient.is_ok());

        let strict = map_record(
            &extracted,
            4,
            &ConvertOptions {
                strict: true,
                ..ConvertOptions::default()
            },
        );
        assert_eq!(
            strict.unwrap_err(),
            ConvertError::RequiredFieldMissing {
                row: 5,
                field: "Código"
            }
        );
    }

    #[test]
    fn observations_concatenate_in_contract_order() {
        let mut extracted = sample();
        extracted.wholesale_price = Some(8.0);
        extracted.promo_price = Some(7.25);
        let record = map_record(&extracted, 0, &ConvertOptions::default()).unwrap();
        assert_eq!(
            record.get("Observações"),
            Some(&CellValue::Text(
                "Preço atacado: 8; Preço promoção: 7.25; ".to_string()
            ))
        );
    }

    #[test]
    fn purchase_price_feeds_both_cost_columns() {
        let mut extracted = sample();
        extracted.purchase_price = Some(3.2);
        let record = map_record(&extracted, 0, &ConvertOptions::default()).unwrap();
        assert_eq!(record.get("Preço de custo"), Some(&CellValue::Number(3.2)));
        assert_eq!(record.get("Preço de compra"), Some(&CellValue::Number(3.2)));
    }
}
