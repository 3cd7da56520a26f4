//! Rich-text message deserialization into editable parts
//!
//!     This crate turns a received chat message (an HTML formatted body or a plain body) into an
//!     ordered sequence of typed parts that an editor can work with, and serializes parts back into
//!     a Markdown body (and, when needed, an HTML formatted body) for resending.
//!
//!     This is a pure lib, that is, it powers msgparts-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the filesystem. Logging goes through `tracing` and is only
//!     visible when the host installs a subscriber.
//!
//! Architecture
//!
//!     The heavy lifting is a small tree-to-linear compiler. The HTML is parsed into a detached
//!     tree (./common/dom.rs), walked depth-first by a generic walker (./common/walker.rs) that
//!     knows nothing about messages, and every visited node is turned into parts by the element
//!     deserializer (./formats/html/elements.rs). Block quotes are handled as a post-processing
//!     step over each batch of parts (./common/quote.rs).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── rules.rs                # Deployment knobs (LaTeX delimiters, permalinks) and per-call options
//!     ├── event.rs                # Event-level entry point, synthetic slash commands
//!     ├── commands.rs             # Slash-command helpers over parts
//!     ├── permalinks.rs           # Permalink resolution and generation
//!     ├── rainbow.rs              # The /rainbow colour transform
//!     ├── parts                   # The Part model, emoji detection and the part factory
//!     ├── common                  # Format agnostic tree code: dom helpers, walker, classifier, quote reflow
//!     └── formats
//!         ├── html                # elements.rs, parser.rs (deserializer), serializer.rs (comrak)
//!         ├── markdown            # Markdown body serializer
//!         └── plain               # Line-oriented deserializer, plain serializer
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <concern>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Round Tripping
//!
//!     The grammar we read (a loose HTML subset) and the one we write (Markdown) are not
//!     isomorphic. What must hold is that a plain body survives deserialize + serialize unchanged,
//!     and that pills written by the Markdown serializer come back as the same pills once the body
//!     is rendered and deserialized again. Nested inline formatting and tables are dropped on
//!     purpose.
//!
//! Library Choices
//!
//!     - html5ever + markup5ever_rcdom: inert HTML parsing
//!     - comrak: Markdown rendering for the outgoing formatted body
//!     - unicode-segmentation: grapheme clusters for emoji splitting
//!     - url + percent-encoding: permalink parsing
//!
pub mod commands;
pub mod common;
pub mod error;
pub mod event;
pub mod format;
pub mod formats;
pub mod parts;
pub mod permalinks;
pub mod rainbow;
pub mod registry;
pub mod rules;

pub use error::{FormatError, PartError};
pub use event::{parse_event, MessageContent, SyntheticCommand};
pub use format::Format;
pub use formats::{html_serialize_if_needed, md_serialize, text_serialize};
pub use parts::{Part, PartKind};
pub use registry::FormatRegistry;
pub use rules::{DeserializeRules, ParseOptions};
