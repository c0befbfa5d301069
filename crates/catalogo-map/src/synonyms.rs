//! Synonym tables mapping canonical fields to known header spellings.
//!
//! Declarative data, not code: new aliases and locales are additive here.
//! Candidate order is priority order; earlier names win over later ones.

use catalogo_model::CanonicalField;

/// Candidate header names for a canonical field, highest priority first.
///
/// Accented spellings come first; matching also runs the candidates through
/// the same normalization as the headers, so unaccented exports still bind.
pub fn candidates(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::Code => &[
            "Código",
            "Codigo",
            "Cód",
            "Cod",
            "Código do Produto",
            "Codigo do Produto",
            "Referência",
            "Referencia",
            "Ref",
        ],
        CanonicalField::Description => &[
            "Descrição",
            "Descricao",
            "Desc",
            "Nome",
            "Nome do Produto",
            "Produto",
            "Denominação",
            "Denominacao",
            "Mercadoria",
        ],
        CanonicalField::Unit => &["Unidade", "Unid", "Und", "UN"],
        CanonicalField::TaxClassification => &[
            "NCM",
            "Classificação Fiscal",
            "Classificacao Fiscal",
            "Class Fiscal",
            "Class. Fiscal",
        ],
        CanonicalField::RetailPrice => &[
            "Preço Varejo",
            "Preco Varejo",
            "Preço de Venda",
            "Preco de Venda",
            "Preço",
            "Preco",
            "Valor Unitário",
            "Valor Unitario",
            "Valor",
        ],
        CanonicalField::WholesalePrice => &[
            "Preço Atacado",
            "Preco Atacado",
            "Atacado",
            "Pr Atacado",
        ],
        CanonicalField::PromoPrice => &[
            "Preço Promoção",
            "Preco Promocao",
            "Preço Promocional",
            "Preco Promocional",
            "Promoção",
            "Promocao",
        ],
        CanonicalField::Stock => &["Estoque", "Saldo", "Quantidade", "Qtde", "Qtd"],
        CanonicalField::PurchasePrice => &[
            "Preço de Compra",
            "Preco de Compra",
            "Preço Custo",
            "Preco Custo",
            "Preço de Custo",
            "Preco de Custo",
            "Custo",
        ],
        CanonicalField::OriginalCode => &[
            "Código Original",
            "Codigo Original",
            "Cód Original",
            "Cod Original",
            "Código do Fornecedor",
            "Codigo do Fornecedor",
        ],
        CanonicalField::Supplier => &["Fornecedor", "Fabricante", "Marca"],
        CanonicalField::Address => &[
            "Endereço",
            "Endereco",
            "Localização",
            "Localizacao",
            "Local",
            "Prateleira",
        ],
        CanonicalField::Address2 => &[
            "Endereço 2",
            "Endereco 2",
            "Endereço2",
            "Endereco2",
            "Local 2",
        ],
        CanonicalField::Warranty => &["Garantia", "Meses Garantia", "Garantia Meses"],
        CanonicalField::Pending => &["Pendência", "Pendencia", "Pendente"],
        CanonicalField::ProductLine => &[
            "Linha",
            "Linha de Produto",
            "Linha de Produtos",
            "Departamento",
        ],
        CanonicalField::Group => &[
            "Grupo",
            "Grupo de Produtos",
            "Categoria",
            "Seção",
            "Secao",
        ],
    }
}

/// Normalized column names that count as description sources during the
/// synonym-scan inference tier.
pub const DESCRIPTION_SCAN_NAMES: &[&str] = &[
    "descricao",
    "desc",
    "nome",
    "nome do produto",
    "produto",
    "denominacao",
    "mercadoria",
    "item",
    "material",
];

/// Normalized-name substrings that disqualify a column from the exhaustive
/// description scan (codes, prices, fiscal data and units are never
/// descriptions).
pub const DESCRIPTION_EXCLUDE_MARKERS: &[&str] =
    &["cod", "preco", "valor", "custo", "ncm", "fiscal", "unid"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_candidates() {
        for field in CanonicalField::ALL {
            assert!(!candidates(field).is_empty(), "no candidates for {field}");
        }
    }

    #[test]
    fn scan_names_are_already_normalized() {
        for name in DESCRIPTION_SCAN_NAMES {
            assert_eq!(*name, crate::normalize_header(name));
        }
    }
}
