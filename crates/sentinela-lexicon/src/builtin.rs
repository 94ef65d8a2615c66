//! Built-in Portuguese lexicons.
//!
//! Bump [`LEXICON_VERSION`] whenever a list changes: the version is part of
//! every cache fingerprint.

pub const LEXICON_VERSION: &str = "pt-br.4";

// Semantic category names.
pub const CRITICAL_KEYWORDS: &str = "critical_keywords";
pub const COVERAGE_PATTERNS: &str = "coverage_patterns";
pub const CRIMINAL_CONTEXTS: &str = "criminal_contexts";
pub const EVASION_INDICATORS: &str = "evasion_indicators";
pub const GENERAL_SUSPICIOUS: &str = "general_suspicious";
pub const BEHAVIORAL_INDICATORS: &str = "behavioral_indicators";
pub const NORMAL_INDICATORS: &str = "normal_indicators";

// Route list names.
pub const BORDER_LOCATIONS: &str = "border_locations";
pub const ROUND_TRIP_PHRASES: &str = "round_trip_phrases";
pub const ILLICIT_TRAVEL_PHRASES: &str = "illicit_travel_phrases";
pub const HIGH_RISK_AREA_PHRASES: &str = "high_risk_area_phrases";
pub const CORROBORATING_BEHAVIOR: &str = "corroborating_behavior";
pub const CORROBORATING_FREQUENCY: &str = "corroborating_frequency";

/// Semantic categories in scoring order. Normalizing terms come last.
pub const SEMANTIC_CATEGORIES: [&str; 7] = [
    CRITICAL_KEYWORDS,
    COVERAGE_PATTERNS,
    CRIMINAL_CONTEXTS,
    EVASION_INDICATORS,
    GENERAL_SUSPICIOUS,
    BEHAVIORAL_INDICATORS,
    NORMAL_INDICATORS,
];

pub const ROUTE_LISTS: [&str; 6] = [
    BORDER_LOCATIONS,
    ROUND_TRIP_PHRASES,
    ILLICIT_TRAVEL_PHRASES,
    HIGH_RISK_AREA_PHRASES,
    CORROBORATING_BEHAVIOR,
    CORROBORATING_FREQUENCY,
];

/// Built-in terms for a category or route list.
pub fn terms(name: &str) -> Option<&'static [&'static str]> {
    let terms: &[&str] = match name {
        CRITICAL_KEYWORDS => &[
            "droga", "drogas", "cocaína", "maconha", "crack", "tráfico", "traficante",
            "traficantes", "arma", "armas", "revolver", "revólver", "pistola", "munição",
            "munições", "disparo", "roubo", "assalto", "furto", "receptação", "foragido",
            "procurado", "mandado", "boca de fumo", "ponto de droga", "contenção",
            "flagrante", "apreensão", "entorpecente", "entorpecentes", "pó", "pedra",
            "rifle", "escopeta", "calibre", "cartucho", "latrocínio", "homicídio",
            "lesão corporal",
        ],
        COVERAGE_PATTERNS => &[
            "estava passando e vi", "não sabia de nada", "só estava dando uma volta",
            "estava indo para casa", "não conhecia ninguém", "estava esperando alguém",
            "estava perdido", "peguei carona", "estava indo trabalhar",
            "estava voltando do trabalho", "não tinha conhecimento", "nunca vi isso antes",
            "apareceu do nada", "não é meu", "alguém deve ter colocado",
            "não sei como chegou aqui", "estava guardando para alguém", "achei na rua",
        ],
        CRIMINAL_CONTEXTS => &[
            "zona de tráfico", "área controlada", "território", "ponto conhecido",
            "local suspeito", "região perigosa", "horário suspeito", "madrugada",
            "local ermo", "sem documento", "sem documentos", "sem identificação",
            "sem identidade", "não colaborou", "não explicou", "não esclareceu", "nervoso",
            "atitude suspeita", "comportamento estranho", "olhar desconfiado",
            "tentou fugir", "resistiu", "agiu de forma estranha", "demonstrou nervosismo",
            "local conhecido pelo tráfico", "área de conflito", "ponto de venda",
            "boca de fumo ativa",
        ],
        EVASION_INDICATORS => &[
            "não lembro", "não sei", "talvez", "acho que", "pode ser", "não tenho certeza",
            "mais ou menos", "não reparei", "não prestei atenção", "não percebi",
            "estava distraído", "não me lembro bem", "meio que", "tipo assim",
            "não faço ideia", "sei lá", "vai saber", "pode ter sido", "acho que sim",
            "acho que não",
        ],
        GENERAL_SUSPICIOUS => &[
            "suspeito", "suspeita", "suspeitos", "mentiu", "contradição", "contradições",
            "escondido", "escondida", "denúncia", "denúncia anônima", "ilícito", "ilícitos",
            "irregular", "fronteira", "ec ruim",
        ],
        BEHAVIORAL_INDICATORS => &[
            "fugiu", "fuga", "correu", "evadiu", "escondeu", "jogou fora", "dispensou",
            "desobedeceu", "agressivo", "hesitou", "gaguejou", "trêmulo",
            "versões diferentes", "mudou a versão",
        ],
        NORMAL_INDICATORS => &[
            "trabalho", "emprego", "família", "filhos", "esposa", "casa", "igreja",
            "escola", "hospital", "médico", "documentos", "carteira", "identidade", "cpf",
            "colaborou", "ajudou", "explicou", "esclareceu", "honesto", "trabalhador",
            "responsável", "pai de família",
        ],
        BORDER_LOCATIONS => &[
            "fronteira", "fronteira brasil", "fronteira argentina", "fronteira paraguai",
            "fronteira uruguai", "fronteira bolívia", "fronteira colômbia",
            "região do pantanal", "mato grosso do sul", "foz do iguaçu", "corumbá",
            "uruguaiana", "santana do livramento",
        ],
        ROUND_TRIP_PHRASES => &[
            "ida e volta", "ida e retorno", "ida volta", "ida retorno", "mesmo dia",
            "mesmo trajeto", "trajeto idêntico", "rota idêntica", "frequência alta",
            "muitas viagens", "viagens constantes",
        ],
        ILLICIT_TRAVEL_PHRASES => &[
            "sem destino claro", "destino incerto", "sem justificativa", "viagem sem motivo",
            "sem explicação", "destino suspeito", "rota incomum", "trajeto estranho",
            "caminho suspeito", "frequência suspeita", "padrão estranho",
            "comportamento repetitivo",
        ],
        HIGH_RISK_AREA_PHRASES => &[
            "fronteira seca", "área de risco", "zona de conflito", "região perigosa",
            "área suspeita", "local de risco", "ponto de tráfico", "área de contrabando",
            "zona de drogas",
        ],
        CORROBORATING_BEHAVIOR => &[
            "suspeito", "nervoso", "mentiu", "contradição", "evadir", "fuga",
        ],
        CORROBORATING_FREQUENCY => &["frequência", "muitas vezes", "repetido", "constante"],
        _ => return None,
    };
    Some(terms)
}
