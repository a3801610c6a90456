use crate::{
    identifier::{arxiv, doi, pmc, publisher, pubmed},
    rule::{Rule, Surface},
    scheme::Scheme,
};

/// The built-in classification table.
///
/// NOTE: Ordering is important here, as it signifies priority. If two rules are able to match a
/// given input, the first one to show up in this list is used, so host-specific rules must come
/// before the host-agnostic fallbacks at the end.
pub static RULES: &[Rule] = &[
    // Identifiers given without a URL around them.
    Rule {
        name: "pubmed-bare",
        scheme: Scheme::Pubmed,
        surface: Surface::Bare,
        pattern: r"^(?P<id>\d+)$",
        extract: pubmed::normalise,
        example: "34739845",
        expected: "34739845",
    },
    Rule {
        name: "pmc-bare",
        scheme: Scheme::Pmc,
        surface: Surface::Bare,
        pattern: r"(?i)^(?:pmcid:\s*)?(?P<id>pmc\d+)$",
        extract: pmc::normalise,
        example: "PMC5731347",
        expected: "PMC5731347",
    },
    Rule {
        name: "arxiv-bare",
        scheme: Scheme::Arxiv,
        surface: Surface::Bare,
        pattern: r"(?i)^(?P<id>arxiv:\s*\S+)$",
        extract: arxiv::normalise,
        example: "arXiv:2101.00001v2",
        expected: "2101.00001v2",
    },
    Rule {
        name: "doi-bare",
        scheme: Scheme::Doi,
        surface: Surface::Bare,
        pattern: r"(?i)^(?P<id>(?:urn:)?(?:doi:\s*)?10\.\d+/\S+)$",
        extract: doi::normalise_bare,
        example: "10.21105/joss.01708.pdf",
        expected: "10.21105/joss.01708",
    },
    // PubMed and PubMed Central.
    Rule {
        name: "pubmed",
        scheme: Scheme::Pubmed,
        surface: Surface::Web,
        pattern: r"^(?:ncbi\.nlm\.nih\.gov/pubmed|pubmed\.ncbi\.nlm\.nih\.gov)/(?P<id>\d+)(?:[/,?]|$)",
        extract: pubmed::normalise,
        example: "http://www.ncbi.nlm.nih.gov/pubmed/34739845",
        expected: "34739845",
    },
    Rule {
        name: "europepmc-med",
        scheme: Scheme::Pubmed,
        surface: Surface::Web,
        pattern: r"(?i)^europepmc\.org/(?:abstract|article)/med/(?P<id>\d+)(?:[/?]|$)",
        extract: pubmed::normalise,
        example: "https://europepmc.org/article/MED/34739845",
        expected: "34739845",
    },
    Rule {
        name: "pmc",
        scheme: Scheme::Pmc,
        surface: Surface::Web,
        pattern: r"(?i)^(?:ncbi\.nlm\.nih\.gov/pmc|pmc\.ncbi\.nlm\.nih\.gov)/articles/(?P<id>(?:pmc)?\d+)(?:[/?]|$)",
        extract: pmc::normalise,
        example: "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC5731347/pdf/MSB-13-954.pdf",
        expected: "PMC5731347",
    },
    Rule {
        name: "europepmc-pmc",
        scheme: Scheme::Pmc,
        surface: Surface::Web,
        pattern: r"(?i)^europepmc\.org/(?:abstract|article)/pmc/(?P<id>pmc\d+)(?:[/?]|$)",
        extract: pmc::normalise,
        example: "https://europepmc.org/article/PMC/PMC5731347",
        expected: "PMC5731347",
    },
    // arXiv.
    Rule {
        name: "arxiv",
        scheme: Scheme::Arxiv,
        surface: Surface::Web,
        pattern: r"^(?:export\.)?arxiv\.org/(?:abs|pdf)/(?P<id>[^?]+)",
        extract: arxiv::normalise,
        example: "https://arxiv.org/abs/2101.00001v2",
        expected: "2101.00001v2",
    },
    // DOI resolvers.
    Rule {
        name: "doi-resolver",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^(?:dx\.)?doi\.org/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://doi.org/10.1000/XYZ123",
        expected: "10.1000/xyz123",
    },
    // bioRxiv and medRxiv.
    Rule {
        name: "biorxiv-lookup",
        scheme: Scheme::Biorxiv,
        surface: Surface::Web,
        pattern: r"^biorxiv\.org/lookup/doi/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "http://biorxiv.org/lookup/doi/10.1101/2020.03.27.001834",
        expected: "10.1101/2020.03.27.001834",
    },
    Rule {
        name: "medrxiv-lookup",
        scheme: Scheme::Medrxiv,
        surface: Surface::Web,
        pattern: r"^medrxiv\.org/lookup/doi/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://www.medrxiv.org/lookup/doi/10.1101/2020.04.01.20050542",
        expected: "10.1101/2020.04.01.20050542",
    },
    Rule {
        name: "rxiv-early",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^(?:biorxiv|medrxiv)\.org/content/(?:(?:biorxiv|medrxiv)/)?early/\d{4}/\d{2}/\d{2}/(?P<id>[^/?]+)",
        extract: publisher::biorxiv_article,
        example: "http://www.biorxiv.org/content/early/2017/08/09/174094",
        expected: "10.1101/174094",
    },
    Rule {
        name: "rxiv-content",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^(?:biorxiv|medrxiv)\.org/content/(?P<id>10\.1101/[^/?]+)",
        extract: publisher::biorxiv_doi,
        example: "https://www.biorxiv.org/content/10.1101/2020.03.27.001834v1.full.pdf",
        expected: "10.1101/2020.03.27.001834",
    },
    // Publishers whose URLs carry only the registrant-local part of the DOI.
    Rule {
        name: "preprints-org",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^preprints\.org/manuscript/(?P<id>[^?]+)",
        extract: publisher::preprints_manuscript,
        example: "https://www.preprints.org/manuscript/202003.0333/v1",
        expected: "10.20944/preprints202003.0333",
    },
    Rule {
        name: "nature",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^nature\.com/articles/(?P<id>[^/?]+)",
        extract: publisher::nature_article,
        example: "https://www.nature.com/articles/s41586-020-2012-7.pdf",
        expected: "10.1038/s41586-020-2012-7",
    },
    // Publishers whose URLs carry the whole DOI.
    Rule {
        name: "frontiers",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^frontiersin\.org/articles?/(?P<id>10\.[^?]+?)(?:/(?:full|abstract))?(?:\?|$)",
        extract: doi::normalise,
        example: "https://www.frontiersin.org/article/10.3389/fmicb.2019.00001/full",
        expected: "10.3389/fmicb.2019.00001",
    },
    Rule {
        name: "plos-article",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^journals\.plos\.org/[^/?]+/article(?:/file)?\?(?:[^&]*&)*id=(?P<id>10\.[^&]+)",
        extract: doi::normalise,
        example: "https://journals.plos.org/ploscompbiol/article/file?id=10.1371/journal.pcbi.1007311&type=printable",
        expected: "10.1371/journal.pcbi.1007311",
    },
    Rule {
        name: "plos-resolver",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^dx\.plos\.org/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "http://dx.plos.org/10.1371/journal.pone.0000001",
        expected: "10.1371/journal.pone.0000001",
    },
    Rule {
        name: "joss",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^joss\.theoj\.org/papers/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://joss.theoj.org/papers/10.21105/joss.01708",
        expected: "10.21105/joss.01708",
    },
    Rule {
        name: "springer",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^link\.springer\.com/(?:(?:article|chapter|book|content/pdf|referenceworkentry|protocol)/)?(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://link.springer.com/article/10.1007/s00109-019-01825-3",
        expected: "10.1007/s00109-019-01825-3",
    },
    Rule {
        name: "biomedcentral",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^[a-z0-9-]+\.biomedcentral\.com/(?:articles|track/pdf)/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://bmcbioinformatics.biomedcentral.com/track/pdf/10.1186/s12859-019-3000-9",
        expected: "10.1186/s12859-019-3000-9",
    },
    Rule {
        name: "society-doi-lookup",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^(?:jvi\.asm\.org|jcm\.asm\.org|sciencemag\.org|pnas\.org)/(?:cgi|lookup)/doi/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "http://jvi.asm.org/cgi/doi/10.1128/JVI.00239-19",
        expected: "10.1128/jvi.00239-19",
    },
    Rule {
        name: "wiley-resolver",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^doi\.wiley\.com/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "http://doi.wiley.com/10.1002/pro.3721",
        expected: "10.1002/pro.3721",
    },
    Rule {
        name: "microbiology-research",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^microbiologyresearch\.org/content/journal/[a-z]+/(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://www.microbiologyresearch.org/content/journal/jgv/10.1099/jgv.0.001334",
        expected: "10.1099/jgv.0.001334",
    },
    // Fallback: any publisher serving articles under a `/doi/` path.
    Rule {
        name: "publisher-doi-path",
        scheme: Scheme::Doi,
        surface: Surface::Web,
        pattern: r"^[^/]+/(?:[^?]*/)?doi/(?:(?:abs|full|pdf|epdf|pdfdirect|reader|book|chapter)/)?(?P<id>10\.[^?]+)",
        extract: doi::normalise,
        example: "https://www.tandfonline.com/doi/full/10.1080/14786419.2019.1600058",
        expected: "10.1080/14786419.2019.1600058",
    },
];
