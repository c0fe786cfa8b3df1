//! Fixed lookup tables used for classification. These never change during a run.

pub const DEFAULT_OUTPUT_FILE: &str = "codebase_documentation.txt";

pub const UNKNOWN_TYPE: &str = "Unknown";

pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".pytest_cache",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "target",
    "bin",
    "obj",
    ".vscode",
    ".idea",
    "vendor",
    "coverage",
    ".nyc_output",
    "uploads",
    "logs",
    "tmp",
    "temp",
    ".cache",
];

pub const IGNORED_PATTERNS: &[&str] = &[
    "*.log",
    "*.tmp",
    "*.temp",
    "*.cache",
    "*.pid",
    "*.lock",
    "*.stackdump",
    "package-lock.json",
    "yarn.lock",
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.exe",
    "*.dll",
    "*.so",
    "*.dylib",
    "*.zip",
    "*.tar.gz",
    "*.rar",
    "*.7z",
    "*.pdf",
    "*.doc",
    "*.docx",
    "*.xls",
    "*.xlsx",
    "*.ppt",
    "*.pptx",
    "*.jpg",
    "*.jpeg",
    "*.png",
    "*.gif",
    "*.svg",
    "*.ico",
    "*.mp3",
    "*.mp4",
    "*.avi",
    "*.mov",
    "*.wav",
    "*.flac",
];

/// Extension (lowercase, without the dot) to human readable type label.
pub const TYPE_LABELS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("md", "Markdown"),
    ("txt", "Text"),
    ("sql", "SQL"),
    ("py", "Python"),
    ("env", "Environment"),
    ("gitignore", "Git Ignore"),
    ("yml", "YAML"),
    ("yaml", "YAML"),
    ("xml", "XML"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript JSX"),
    ("jsx", "JavaScript JSX"),
    ("php", "PHP"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("c", "C"),
    ("h", "C Header"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("rb", "Ruby"),
    ("kt", "Kotlin"),
    ("swift", "Swift"),
    ("dart", "Dart"),
    ("vue", "Vue"),
    ("svelte", "Svelte"),
    ("dockerfile", "Dockerfile"),
    ("sh", "Shell Script"),
    ("bat", "Batch Script"),
    ("ps1", "PowerShell"),
];

/// File names that always land in the configuration bucket, wherever they live.
pub const CONFIG_FILE_NAMES: &[&str] = &["package.json", ".env", ".gitignore", "app.js"];

pub const DOCUMENTATION_SUFFIX: &str = ".md";
pub const DATABASE_SCRIPT_SUFFIX: &str = ".sql";

pub const DEFAULT_OVERVIEW: &str = "This document contains the source files of the project rooted at the path above,\n\
grouped by category (configuration, models, controllers, routes, middleware,\n\
documentation, database scripts and everything else). Build artifacts, dependencies\n\
and binary assets are excluded.\n";

pub const DEFAULT_CLOSING: &str = "This documentation contains the complete source code of the scanned project,\n\
including models, controllers, routes, middleware, and configuration files.\n";
