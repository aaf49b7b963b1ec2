//! Static keyword tables used by the interpreter.
//!
//! Keywords are written the way users type them; the interpreter folds both
//! sides before comparing, so accents here are cosmetic. Table order is
//! significant: the first matching entry wins.

pub struct SymptomEntry {
    pub phrase: &'static str,
    pub specialty: &'static str,
    /// Follows "Esta es la lista de" in the interpretation sentence.
    pub message: &'static str,
}

pub const SPECIALTY_KEYWORDS: &[(&str, &str)] = &[
    ("cardiologo", "Cardiología"),
    ("cardiologa", "Cardiología"),
    ("cardiologia", "Cardiología"),
    ("pediatra", "Pediatría"),
    ("pediatria", "Pediatría"),
    ("dermatologo", "Dermatología"),
    ("dermatologa", "Dermatología"),
    ("dermatologia", "Dermatología"),
    ("ginecologo", "Ginecología"),
    ("ginecologa", "Ginecología"),
    ("ginecologia", "Ginecología"),
    ("traumatologo", "Traumatología"),
    ("traumatologa", "Traumatología"),
    ("traumatologia", "Traumatología"),
    ("oftalmologo", "Oftalmología"),
    ("oftalmologa", "Oftalmología"),
    ("oftalmologia", "Oftalmología"),
    ("gastroenterologo", "Gastroenterología"),
    ("gastroenterologa", "Gastroenterología"),
    ("gastroenterologia", "Gastroenterología"),
    ("neurologo", "Neurología"),
    ("neurologa", "Neurología"),
    ("neurologia", "Neurología"),
];

pub const SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        phrase: "dolor de cabeza",
        specialty: "Neurología",
        message: "neurólogos que pueden ayudarte con tu dolor de cabeza",
    },
    SymptomEntry {
        phrase: "duele la cabeza",
        specialty: "Neurología",
        message: "neurólogos que pueden ayudarte con tu dolor de cabeza",
    },
    SymptomEntry {
        phrase: "migraña",
        specialty: "Neurología",
        message: "neurólogos especializados en migrañas",
    },
    SymptomEntry {
        phrase: "dolor de espalda",
        specialty: "Traumatología",
        message: "traumatólogos que pueden tratar tu dolor de espalda",
    },
    SymptomEntry {
        phrase: "duele la espalda",
        specialty: "Traumatología",
        message: "traumatólogos que pueden tratar tu dolor de espalda",
    },
    SymptomEntry {
        phrase: "lesión deportiva",
        specialty: "Traumatología",
        message: "traumatólogos especializados en lesiones deportivas",
    },
    SymptomEntry {
        phrase: "dolor de rodilla",
        specialty: "Traumatología",
        message: "traumatólogos para evaluar tu rodilla",
    },
    SymptomEntry {
        phrase: "duele la rodilla",
        specialty: "Traumatología",
        message: "traumatólogos para evaluar tu rodilla",
    },
    SymptomEntry {
        phrase: "dolor de corazón",
        specialty: "Cardiología",
        message: "cardiólogos para revisar tu salud cardíaca",
    },
    SymptomEntry {
        phrase: "palpitaciones",
        specialty: "Cardiología",
        message: "cardiólogos que pueden evaluar tus palpitaciones",
    },
    SymptomEntry {
        phrase: "problemas de piel",
        specialty: "Dermatología",
        message: "dermatólogos para tratar tus problemas de piel",
    },
    SymptomEntry {
        phrase: "acné",
        specialty: "Dermatología",
        message: "dermatólogos especializados en tratamiento de acné",
    },
    SymptomEntry {
        phrase: "manchas en la piel",
        specialty: "Dermatología",
        message: "dermatólogos para evaluar las manchas en tu piel",
    },
    SymptomEntry {
        phrase: "embarazo",
        specialty: "Ginecología",
        message: "ginecólogos para el cuidado de tu embarazo",
    },
    SymptomEntry {
        phrase: "problemas menstruales",
        specialty: "Ginecología",
        message: "ginecólogos para evaluar tus problemas menstruales",
    },
    SymptomEntry {
        phrase: "control infantil",
        specialty: "Pediatría",
        message: "pediatras para el control de tu hijo/a",
    },
    SymptomEntry {
        phrase: "vacunas niños",
        specialty: "Pediatría",
        message: "pediatras para las vacunas de tu hijo/a",
    },
    SymptomEntry {
        phrase: "fiebre niño",
        specialty: "Pediatría",
        message: "pediatras para evaluar la fiebre de tu hijo/a",
    },
    SymptomEntry {
        phrase: "problemas digestivos",
        specialty: "Gastroenterología",
        message: "gastroenterólogos para tratar tus problemas digestivos",
    },
    SymptomEntry {
        phrase: "dolor de estómago",
        specialty: "Gastroenterología",
        message: "gastroenterólogos para evaluar tu dolor de estómago",
    },
    SymptomEntry {
        phrase: "duele el estómago",
        specialty: "Gastroenterología",
        message: "gastroenterólogos para evaluar tu dolor de estómago",
    },
    SymptomEntry {
        phrase: "problemas de visión",
        specialty: "Oftalmología",
        message: "oftalmólogos para revisar tu visión",
    },
    SymptomEntry {
        phrase: "vista borrosa",
        specialty: "Oftalmología",
        message: "oftalmólogos para evaluar tu vista borrosa",
    },
    SymptomEntry {
        phrase: "lentes",
        specialty: "Oftalmología",
        message: "oftalmólogos para evaluación de lentes",
    },
];

pub const TODAY_KEYWORDS: &[&str] = &["hoy", "ahora", "urgente"];
pub const TOMORROW_KEYWORDS: &[&str] = &["mañana"];
pub const WEEK_KEYWORDS: &[&str] = &["esta semana", "semana"];

pub const VIRTUAL_KEYWORDS: &[&str] = &["virtual", "online", "videollamada", "teleconsulta"];
pub const PRESENCIAL_KEYWORDS: &[&str] = &["presencial", "en persona", "consultorio"];

/// Lima districts recognised in free text, matched as whole words.
pub const DISTRICTS: &[&str] = &[
    "san isidro",
    "miraflores",
    "surco",
    "la molina",
    "surquillo",
    "jesus maria",
    "lince",
    "magdalena",
    "pueblo libre",
    "san miguel",
    "callao",
    "los olivos",
    "san juan de lurigancho",
    "ate",
];
