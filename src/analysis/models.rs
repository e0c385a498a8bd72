// Analysis report models — one topic analyzed across outlets.
//
// The wire format keeps the analysis pipeline's Spanish field names; Rust
// names are English. Almost every section is optional: the pipeline has
// gone through several prompt revisions and older reports miss newer
// sections, so everything beyond the core header is `Option` or defaults
// to empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A full cross-outlet analysis of one news topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "fecha_analisis")]
    pub analyzed_at: String,
    #[serde(rename = "total_articulos", default)]
    pub article_total: u32,
    #[serde(rename = "resumen_objetivo", default)]
    pub objective_summary: String,
    #[serde(rename = "lista_medios", default)]
    pub outlets: Vec<String>,
    #[serde(rename = "total_medios", default)]
    pub outlet_total: u32,
    #[serde(rename = "noticias_analizadas", default)]
    pub articles_analyzed: u32,
    #[serde(rename = "puntos_comunes", default)]
    pub common_points: Vec<String>,
    #[serde(rename = "analisis_5w1h", default)]
    pub five_w_one_h: Option<FiveWOneH>,
    #[serde(rename = "divergencias_principales", default)]
    pub divergences: Vec<Divergence>,
    #[serde(rename = "cobertura_por_medio", default)]
    pub coverage_by_outlet: HashMap<String, OutletCoverage>,
    #[serde(rename = "analisis_sentimiento", default)]
    pub sentiment: Option<Sentiment>,
    #[serde(rename = "analisis_detallado_sesgo", default)]
    pub detailed_bias: HashMap<String, DetailedBias>,
    #[serde(rename = "sesgo_detectado", default)]
    pub detected_bias: HashMap<String, DetectedBias>,
    #[serde(rename = "palabras_mas_frecuentes_por_medio", default)]
    pub frequent_words: HashMap<String, FrequentWords>,
    #[serde(rename = "omisiones_importantes", default)]
    pub omissions: Vec<Omission>,
    /// Older reports used a different key for the same list.
    #[serde(rename = "omisiones_relevantes", default)]
    pub omissions_legacy: Vec<Omission>,
    #[serde(rename = "matriz_comparativa", default)]
    pub comparative_matrix: Option<ComparativeMatrix>,
    #[serde(rename = "recomendacion_para_lector", default)]
    pub reader_recommendation: Option<String>,
    #[serde(rename = "modelo_usado", default)]
    pub model_used: Option<String>,
    #[serde(rename = "metodo", default)]
    pub method: Option<String>,
    #[serde(rename = "estadisticas", default)]
    pub stats: Option<AnalysisStats>,
}

impl AnalysisReport {
    /// The omissions list, whichever key this report's vintage used.
    pub fn all_omissions(&self) -> &[Omission] {
        if !self.omissions.is_empty() {
            &self.omissions
        } else {
            &self.omissions_legacy
        }
    }

    /// Outlets ranked by how many articles they contributed, descending.
    pub fn outlets_by_volume(&self) -> Vec<(&str, &OutletDistribution)> {
        let mut ranked: Vec<(&str, &OutletDistribution)> = self
            .stats
            .iter()
            .flat_map(|s| s.distribution_by_outlet.iter())
            .map(|(outlet, dist)| (outlet.as_str(), dist))
            .collect();
        ranked.sort_by(|a, b| b.1.article_count.cmp(&a.1.article_count));
        ranked
    }
}

/// The who/what/when/where/why/how breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveWOneH {
    #[serde(rename = "que", default)]
    pub what: Option<String>,
    #[serde(rename = "quien", default)]
    pub who: Option<String>,
    #[serde(rename = "cuando", default)]
    pub when: Option<String>,
    #[serde(rename = "donde", default)]
    pub location: Option<String>,
    #[serde(rename = "por_que", default)]
    pub why: Option<String>,
    #[serde(rename = "como", default)]
    pub how: Option<String>,
}

/// One aspect on which the outlets' coverage diverges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Divergence {
    #[serde(rename = "aspecto")]
    pub aspect: String,
    #[serde(rename = "diferencia")]
    pub difference: String,
    #[serde(rename = "perspectivas_medios", default)]
    pub outlet_perspectives: HashMap<String, String>,
    #[serde(rename = "impacto_percepcion", default)]
    pub perception_impact: Option<String>,
}

/// How one outlet framed the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletCoverage {
    #[serde(rename = "enfoque_principal", default)]
    pub main_focus: Option<String>,
    #[serde(rename = "tono", default)]
    pub tone: Option<String>,
    #[serde(rename = "elementos_destacados", default)]
    pub highlights: Vec<String>,
}

/// Overall sentiment across the coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(rename = "tono_general", default)]
    pub overall_tone: Option<String>,
    /// 0.0 (sober) to 1.0 (full tabloid).
    #[serde(rename = "nivel_sensacionalismo_promedio", default)]
    pub sensationalism_level: Option<f64>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// Per-outlet detailed bias scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedBias {
    #[serde(rename = "score_sesgo_0_100", default)]
    pub bias_score: Option<f64>,
    #[serde(rename = "clasificacion", default)]
    pub classification: Option<String>,
    #[serde(rename = "lenguaje", default)]
    pub language: Option<BiasLanguage>,
    #[serde(rename = "atribucion_fuentes", default)]
    pub source_attribution: Option<SourceAttribution>,
}

/// Loaded-language indicators for one outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasLanguage {
    #[serde(rename = "nivel_emotividad_0_100", default)]
    pub emotiveness: Option<f64>,
    #[serde(rename = "palabras_cargadas", default)]
    pub loaded_words: Vec<String>,
    #[serde(rename = "intensificadores", default)]
    pub intensifiers: Vec<String>,
    #[serde(rename = "adjetivos_tendenciosos", default)]
    pub slanted_adjectives: Vec<String>,
}

/// How the outlet sources its claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceAttribution {
    #[serde(rename = "citas_directas", default)]
    pub direct_quotes: u32,
    #[serde(rename = "citas_indirectas", default)]
    pub indirect_quotes: u32,
    #[serde(rename = "afirmaciones_sin_fuente", default)]
    pub unsourced_claims: u32,
    #[serde(rename = "score_calidad_fuentes_0_100", default)]
    pub source_quality_score: Option<f64>,
}

/// Per-outlet orientation estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedBias {
    #[serde(rename = "orientacion_detectada", default)]
    pub orientation: Option<String>,
    /// 0.0 to 1.0.
    #[serde(rename = "nivel_bias", default)]
    pub level: Option<f64>,
    #[serde(rename = "indicadores", default)]
    pub indicators: Vec<String>,
}

/// Word-frequency buckets for one outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentWords {
    #[serde(rename = "positivas", default)]
    pub positive: Vec<String>,
    #[serde(rename = "negativas", default)]
    pub negative: Vec<String>,
    #[serde(rename = "neutras", default)]
    pub neutral: Vec<String>,
}

/// Information one outlet left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Omission {
    #[serde(rename = "medio")]
    pub outlet: String,
    #[serde(rename = "informacion_omitida")]
    pub omitted_information: String,
}

/// Cross-outlet comparison verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeMatrix {
    #[serde(rename = "medio_mas_objetivo", default)]
    pub most_objective_outlet: Option<String>,
    #[serde(rename = "score_mas_objetivo", default)]
    pub most_objective_score: Option<f64>,
    #[serde(rename = "medio_mas_sesgado", default)]
    pub most_biased_outlet: Option<String>,
    #[serde(rename = "score_mas_sesgado", default)]
    pub most_biased_score: Option<f64>,
    #[serde(rename = "consensus_nivel", default)]
    pub consensus_level: Option<String>,
}

/// Coverage statistics attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    #[serde(rename = "distribucion_por_medio", default)]
    pub distribution_by_outlet: HashMap<String, OutletDistribution>,
}

/// One outlet's share of the analyzed coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletDistribution {
    #[serde(rename = "num_articulos", default)]
    pub article_count: u32,
    #[serde(rename = "porcentaje_cobertura", default)]
    pub coverage_percent: f64,
    #[serde(default)]
    pub urls: Vec<String>,
}
