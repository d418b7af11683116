//! Site content library
//!
//! The articles, papers and projects the terminal surfaces, plus the
//! default namespace built from them. Page files in the VFS store a key
//! into this library; `serve` resolves the key and hands rendering off to
//! the presentation layer.

use crate::vfs::VfsNode;

/// Renderable document resolved from a page key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub body: Vec<String>,
}

/// Key -> page lookup, insertion ordered
pub struct ContentLibrary {
    pages: Vec<(String, PageContent)>,
}

impl ContentLibrary {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Register a page under `key`, replacing any previous entry
    pub fn insert(&mut self, key: &str, content: PageContent) {
        if let Some(slot) = self.pages.iter_mut().find(|(k, _)| k == key) {
            slot.1 = content;
        } else {
            self.pages.push((String::from(key), content));
        }
    }

    pub fn resolve_page(&self, key: &str) -> Option<&PageContent> {
        self.pages.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|(k, _)| k.as_str())
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::new()
    }
}

// Built-in site data: key, title, summary
const ARTICLES: &[(&str, &str, &str)] = &[
    (
        "unbound-docker",
        "Recursive DNS with Unbound and Docker",
        "Running a local recursive resolver in a container, and what it does to lookup latency.",
    ),
    (
        "vector-search-tradeoffs",
        "Latency and Recall Trade-offs in Vector Search",
        "How index parameters move the recall/latency frontier in approximate nearest neighbour search.",
    ),
    (
        "multimodal-embeddings",
        "Multimodal Embeddings in Production",
        "Serving image and text embeddings from one model without blowing the latency budget.",
    ),
];

// key, title, venue, abstract line
const PAPERS: &[(&str, &str, &str, &str)] = &[
    (
        "ann-filtering",
        "Filtered Approximate Nearest Neighbour Search",
        "SIGIR",
        "Evaluates pre- and post-filtering strategies for metadata-constrained vector queries.",
    ),
    (
        "dense-retrieval-ecommerce",
        "Dense Retrieval for eCommerce Search",
        "ECIR",
        "Measures multimodal dense retrievers against lexical baselines on product corpora.",
    ),
];

// key, title, repository link, summary
const PROJECTS: &[(&str, &str, &str, &str)] = &[
    (
        "ingrain-server",
        "Ingrain Inference Server",
        "https://github.com/OwenElliottDev/ingrain_server",
        "A high performance scalable wrapper around NVIDIA Triton to serve Timm, OpenCLIP and Sentence Transformers models.",
    ),
    (
        "hnswlib-server",
        "HNSWLib Server",
        "https://github.com/OwenElliottDev/hnswlib_server",
        "A zero dependency statically linked vector search engine built with HNSWLib, with schemaless metadata filtering.",
    ),
    (
        "arcache",
        "Arcache",
        "https://github.com/OwenElliottDev/arcache",
        "Threadsafe cache implementations in Rust sharing one trait, interchangeable behind the same interface.",
    ),
];

const WELCOME_TEXT: &str = "Welcome!\n\
\n\
This terminal is simulated: everything lives in memory.\n\
Type 'help' to see what it can do.";

const ABOUT_TEXT: &str = "Solutions architect and ML engineer working on information\n\
retrieval and vector search. Articles, papers and projects on this\n\
site are browsable from this terminal: 'ls' to look around, 'open'\n\
for text and links, 'serve' for pages.";

/// Library holding every built-in page
pub fn site_library() -> ContentLibrary {
    let mut library = ContentLibrary::new();
    for (key, title, summary) in ARTICLES {
        library.insert(
            key,
            PageContent {
                title: String::from(*title),
                body: vec![String::from(*title), String::new(), String::from(*summary)],
            },
        );
    }
    for (key, title, venue, abstract_line) in PAPERS {
        library.insert(
            key,
            PageContent {
                title: String::from(*title),
                body: vec![
                    String::from(*title),
                    format!("({})", venue),
                    String::new(),
                    String::from(*abstract_line),
                ],
            },
        );
    }
    library
}

/// Default namespace for a fresh terminal
pub fn seed_vfs() -> VfsNode {
    let mut root = VfsNode::root();

    root.insert(VfsNode::text("about.txt", ABOUT_TEXT)).ok();

    let mut home = VfsNode::dir("home");
    home.insert(VfsNode::text("welcome.txt", WELCOME_TEXT)).ok();
    root.insert(home).ok();

    let mut articles = VfsNode::dir("articles");
    for (key, _, _) in ARTICLES {
        articles
            .insert(VfsNode::page(&format!("{}.page", key), key))
            .ok();
    }
    root.insert(articles).ok();

    let mut papers = VfsNode::dir("papers");
    for (key, _, _, _) in PAPERS {
        papers
            .insert(VfsNode::page(&format!("{}.page", key), key))
            .ok();
    }
    root.insert(papers).ok();

    let mut projects = VfsNode::dir("projects");
    for (key, _, link, _) in PROJECTS {
        projects
            .insert(VfsNode::link(&format!("{}.lnk", key), link))
            .ok();
    }
    root.insert(projects).ok();

    root.insert(VfsNode::link(
        "github.lnk",
        "https://github.com/OwenElliottDev",
    ))
    .ok();

    log::debug!(
        "seeded vfs: {} articles, {} papers, {} projects",
        ARTICLES.len(),
        PAPERS.len(),
        PROJECTS.len()
    );
    root
}
