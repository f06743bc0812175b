// ABOUTME: Static data for the wiki editions supported out of the box.
// ABOUTME: Converted into owned LanguagePolicy values by LanguageTable::builtin.

use super::{LanguagePolicy, QotdSelector};

pub(super) struct BuiltinLanguage {
    code: &'static str,
    main_page: &'static str,
    headings: &'static [&'static str],
    word_blocklist: &'static [&'static str],
    disambiguation_category: &'static str,
    qotd: Option<(&'static str, &'static [&'static str])>,
    strip_trailing_credit: bool,
}

impl BuiltinLanguage {
    pub(super) fn to_policy(&self) -> LanguagePolicy {
        LanguagePolicy {
            code: self.code.to_string(),
            main_page: self.main_page.to_string(),
            headings: self.headings.iter().map(|s| s.to_string()).collect(),
            word_blocklist: self.word_blocklist.iter().map(|s| s.to_string()).collect(),
            disambiguation_category: self.disambiguation_category.to_string(),
            qotd: self
                .qotd
                .map(|(id, path)| QotdSelector::new(id, path, '~')),
            strip_trailing_credit: self.strip_trailing_credit,
        }
    }
}

pub(super) const LANGUAGES: &[BuiltinLanguage] = &[
    BuiltinLanguage {
        code: "de",
        main_page: "Hauptseite",
        headings: &["siehe auch", "weblinks", "einzelnachweise", "quellen", "zitate über"],
        word_blocklist: &["Quelle:", "Original:", "Anmerkung:", "zitiert"],
        disambiguation_category: "Begriffsklärung",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "en",
        main_page: "Main Page",
        headings: &["cast", "see also", "external links", "about"],
        word_blocklist: &["quoted", "Variant:", "Retrieved", "Notes:", "article:"],
        disambiguation_category: "Disambiguation_pages",
        qotd: Some(("mf-qotd", &["div", "div", "table", "tbody", "tr"])),
        strip_trailing_credit: true,
    },
    BuiltinLanguage {
        code: "es",
        main_page: "Portada",
        headings: &["véase también", "enlaces externos", "referencias", "fuentes", "sobre"],
        word_blocklist: &["Fuente:", "Variante:", "Nota:", "Citado"],
        disambiguation_category: "Desambiguación",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "eu",
        main_page: "Azala",
        headings: &["ikus, gainera", "kanpo estekak", "erreferentziak"],
        word_blocklist: &["Iturria:"],
        disambiguation_category: "Argipen_orriak",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "fr",
        main_page: "Accueil",
        headings: &["voir aussi", "liens externes", "références", "à propos", "citations sur"],
        word_blocklist: &["Source:", "Variante:", "Note:", "cité"],
        disambiguation_category: "Homonymie",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "he",
        main_page: "עמוד ראשי",
        headings: &["ראו גם", "קישורים חיצוניים", "הערות שוליים"],
        word_blocklist: &["מקור:"],
        disambiguation_category: "דפי_פירושונים",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "it",
        main_page: "Pagina principale",
        headings: &["voci correlate", "altri progetti", "collegamenti esterni", "note", "bibliografia"],
        word_blocklist: &["Fonte:", "Variante:", "Citato"],
        disambiguation_category: "Disambigua",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "pl",
        main_page: "Strona główna",
        headings: &["zobacz też", "linki zewnętrzne", "przypisy", "bibliografia"],
        word_blocklist: &["Źródło:", "Opis:", "Autor:"],
        disambiguation_category: "Strony_ujednoznaczniające",
        qotd: None,
        strip_trailing_credit: false,
    },
    BuiltinLanguage {
        code: "pt",
        main_page: "Página principal",
        headings: &["ver também", "ligações externas", "referências", "sobre"],
        word_blocklist: &["Fonte:", "Variante:", "Citado"],
        disambiguation_category: "Desambiguação",
        qotd: None,
        strip_trailing_credit: false,
    },
];
