//! Built-in lexicon and endpoint lists used when no config file overrides them.
//!
//! The corpus language is Spanish. Every list here is order-sensitive where
//! noted: topic order breaks scoring ties and country order decides the
//! first match.

/// Candidate RSS endpoints, tried in order until one yields items.
pub(crate) const FEED_URLS: &[&str] = &[
    "https://es.mongabay.com/feed/",
    "https://es.mongabay.com/feed/?post_type=post",
];

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub(crate) const ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.9,en;q=0.8";

/// Curated Spanish function words plus frequent news filler.
///
/// Accented forms are kept as written; tokens are compared after diacritic
/// stripping, so only the unaccented spellings ever match.
pub(crate) const STOPWORDS_ES: &[&str] = &[
    "a", "al", "algo", "algunos", "ante", "antes", "aqui", "así", "asi", "aún", "aun",
    "bajo", "bien", "cada", "casi", "como", "con", "contra", "cual", "cuales", "cuando",
    "de", "del", "desde", "donde", "dos", "el", "ella", "ellas", "ellos", "en", "entre",
    "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "está", "estaban",
    "estas", "este", "esto", "estos", "estoy", "fin", "fue", "fueron", "ha", "han",
    "hasta", "hay", "la", "las", "le", "les", "lo", "los", "más", "mas", "me", "mi",
    "mis", "mismo", "muy", "no", "nos", "nuestra", "nuestro", "o", "otra", "otras",
    "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "qué", "se", "sea",
    "según", "segun", "ser", "si", "sí", "sin", "sobre", "son", "su", "sus", "también",
    "tambien", "te", "tener", "tiene", "tienen", "toda", "todas", "todo", "todos", "tu",
    "tus", "un", "una", "uno", "unos", "y", "ya", "yo", "u", "e", "ni",
    // news filler
    "años", "año", "hoy", "ayer", "día", "dias", "días",
];

/// Topic label and its keyword stems, in tie-break order.
pub(crate) const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Deforestación y bosques",
        &["deforest", "tala", "bosque", "incend", "madera", "reforest", "orest"],
    ),
    (
        "Minería y extractivismo",
        &[
            "minería", "mineria", "oro", "cobre", "litio", "petróleo", "petroleo", "gas",
            "hidrocarb", "extractiv", "pozo", "concesión", "concesion",
        ],
    ),
    (
        "Biodiversidad y fauna",
        &[
            "biodivers", "especie", "fauna", "flora", "jaguar", "delfín", "delfin", "mono",
            "ave", "anfib", "reptil", "mamífer", "mamifer", "extinción", "extincion",
        ],
    ),
    (
        "Pueblos indígenas y territorio",
        &[
            "indígen", "indigen", "comunidad", "territorio", "consulta previa", "ancestral",
            "pueblos", "lider", "líder", "defensor", "defensora",
        ],
    ),
    (
        "Agua y contaminación",
        &[
            "agua", "río", "rio", "laguna", "humedal", "contamin", "mercurio", "derrames",
            "derrame", "residuos", "plástico", "plastico",
        ],
    ),
    (
        "Clima y energía",
        &[
            "clima", "cambio climático", "cambio climatico", "emision", "emisiones", "carbono",
            "sequía", "sequia", "inund", "temperatura", "energía", "energia", "renovable",
        ],
    ),
];

/// Latin American countries followed by broader regions, in match order.
pub(crate) const COUNTRIES: &[&str] = &[
    "argentina", "bolivia", "brasil", "chile", "colombia", "costa rica", "cuba",
    "ecuador", "el salvador", "guatemala", "honduras", "mexico", "méxico",
    "nicaragua", "panama", "panamá", "paraguay", "peru", "perú", "republica dominicana",
    "república dominicana", "uruguay", "venezuela",
    "amazonía", "amazonia", "patagonia", "andes",
];

/// Display forms keyed by the diacritic-stripped entry.
pub(crate) const COUNTRY_DISPLAY: &[(&str, &str)] = &[
    ("mexico", "México"),
    ("peru", "Perú"),
    ("panama", "Panamá"),
    ("republica dominicana", "República Dominicana"),
    ("amazonia", "Amazonía"),
    ("andes", "Andes"),
    ("patagonia", "Patagonia"),
];
