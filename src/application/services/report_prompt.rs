pub const DEFAULT_MAX_PROMPT_CHARS: usize = 40_000;

pub const RAW_DATA_SEPARATOR: &str = "--- DADOS BRUTOS DO PDF ---";

pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"Você é um Engenheiro Rodoviário Sênior.
Analise os dados brutos de um LVC (Levantamento Visual Contínuo) e redija um Relatório Técnico Detalhado.

REGRAS:
1. Se um tipo de defeito não aparecer nos dados, escreva "Ocorrências: 0". Nunca invente valores.
2. Para cada ocorrência informe KM exato, lado (LD/LE), dimensões e área ou volume quando existirem.
3. Meios-fios e sarjetas devem ser separados por estado (Bom, Regular, Ruim).
4. Liste os pontos onde há necessidade de implantação de dispositivos ou sinalização.

O relatório deve conter obrigatoriamente as quatro seções abaixo, nesta ordem:

1. OBJETO DA INSPEÇÃO
• Trecho: [nome do trecho]
• Extensão aproximada: [X] km
• Revestimento e acostamento: [tipo, largura, KMs]

2. ANOMALIAS ENCONTRADAS
> Pista de rolamento: panelas, rebaixamentos laterais, erosões, desgaste superficial
  (ocorrências, área ou volume total e detalhamento por KM)
> Drenagem e obras de arte: OAEs, passagens molhadas, bueiros, meios-fios e sarjetas
> Sinalização horizontal e vertical existente
> Serviços gerais: roço lateral

3. RECOMENDAÇÕES TÉCNICAS
• Áreas para restauração (Km inicial a Km final, extensão)
• Meios-fios, sarjetas e placas a implantar (KM, código, lado)

4. CONCLUSÃO TÉCNICA
[Parecer objetivo sobre o estado geral do trecho e as prioridades de intervenção]"#;

/// Keeps the first `max_chars` characters; the tail is what gets dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn build_prompt(template: &str, text: &str, max_chars: usize) -> String {
    format!(
        "{}\n\n{}\n{}",
        template.trim_end(),
        RAW_DATA_SEPARATOR,
        truncate_chars(text, max_chars)
    )
}
