//! The fixed output layout expected by the downstream catalog system.
//!
//! Column names are literal and must match byte-for-byte; the importer on the
//! other side looks them up by name, accents included.

/// Sheet name the downstream importer expects.
pub const OUTPUT_SHEET_NAME: &str = "Produtos";

/// Ordered output columns. Position is part of the contract.
pub const OUTPUT_COLUMNS: [&str; 59] = [
    "ID",
    "Código",
    "Descrição",
    "Unidade",
    "NCM",
    "Origem",
    "Preço",
    "Valor IPI fixo",
    "Observações",
    "Situação",
    "Estoque",
    "Preço de custo",
    "Cód no fornecedor",
    "Fornecedor",
    "Localização",
    "Estoque maximo",
    "Estoque minimo",
    "Peso líquido (Kg)",
    "Peso bruto (Kg)",
    "GTIN/EAN",
    "GTIN/EAN da embalagem",
    "Largura do Produto",
    "Altura do Produto",
    "Profundidade do produto",
    "Data Validade",
    "Descrição do Produto no Fornecedor",
    "Descrição Complementar",
    "Itens p/ caixa",
    "Produto Variação",
    "Tipo Produção",
    "Classe de enquadramento do IPI",
    "Código da lista de serviços",
    "Tipo do item",
    "Grupo de Tags/Tags",
    "Tributos",
    "Código Pai",
    "Código Integração",
    "Grupo de produtos",
    "Marca",
    "CEST",
    "Volumes",
    "Descrição Curta",
    "Cross-Docking",
    "URL Imagens Externas",
    "Link Externo",
    "Meses Garantia no Fornecedor",
    "Clonar dados do pai",
    "Condição do produto",
    "Frete Grátis",
    "Número FCI",
    "Vídeo",
    "Departamento",
    "Unidade de medida",
    "Preço de compra",
    "Valor base ICMS ST para retenção",
    "Valor ICMS ST para retenção",
    "Valor ICMS próprio do substituto",
    "Categoria do produto",
    "Informações Adicionais",
];

/// Position of a column in the output layout.
pub fn column_index(name: &str) -> Option<usize> {
    OUTPUT_COLUMNS.iter().position(|column| *column == name)
}
