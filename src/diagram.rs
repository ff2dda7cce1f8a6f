//! Parser state diagram in Graphviz DOT.
//!
//! The diagram is fixed text: it does not depend on any input and is not
//! derived from [`classify`](crate::classify). It shows the states Start,
//! Section, Key, Value, Comment and End, and a legend.
//!
//! ```rust
//! use flat_toml::diagram::STATE_DIAGRAM;
//!
//! assert!(STATE_DIAGRAM.starts_with("digraph TOMLParser {"));
//! ```

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const STATE_DIAGRAM: &str = r##"digraph TOMLParser {
    // Graph settings
    rankdir=LR;
    size="8,5";
    node [shape=circle, style=filled, fillcolor=lightblue, fontname="Arial"];
    edge [fontname="Arial"];

    // States
    Start [shape=point, fillcolor=black];
    Section [label="Section", fillcolor="#FFB6C1"];
    Key [label="Key", fillcolor="#98FB98"];
    Value [label="Value", fillcolor="#87CEEB"];
    Comment [label="Comment", fillcolor="#DDA0DD"];
    End [shape=doublecircle, fillcolor="#F0E68C"];

    // Transitions
    Start -> Section [label="[", color=blue];
    Start -> Key [label="char", color=green];
    Start -> Comment [label="#", color=purple];

    Section -> Section [label="char", color=red];
    Section -> Key [label="\n", color=blue];

    Key -> Key [label="char", color=green];
    Key -> Value [label="=", color=blue];

    Value -> Value [label="char", color=blue];
    Value -> End [label="\n", color=red];

    Comment -> Comment [label="char", color=purple];
    Comment -> End [label="\n", color=red];

    // Legend
    subgraph cluster_legend {
        label="Legend";
        style=filled;
        color=lightgrey;
        node [shape=box, style=filled, fillcolor=white];
        edge [style=invis];
        legend1 [label="Initial State"];
        legend2 [label="Final State"];
        legend3 [label="Section State"];
        legend4 [label="Key State"];
        legend5 [label="Value State"];
        legend6 [label="Comment State"];
    }
}
"##;

/// Writes [`STATE_DIAGRAM`] to `writer`.
///
/// # Errors
///
/// Returns [`Error::Write`] if writing fails.
pub fn write_state_diagram<W: Write>(writer: &mut W) -> Result<()> {
    writer
        .write_all(STATE_DIAGRAM.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::write(&e.to_string()))
}

/// Creates (or truncates) `path` and writes [`STATE_DIAGRAM`] to it.
///
/// # Errors
///
/// Returns [`Error::DestinationUnwritable`] if the file cannot be created and
/// [`Error::Write`] if writing fails afterwards.
pub fn write_state_diagram_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|e| Error::destination_unwritable(path, &e.to_string()))?;
    write_state_diagram(&mut BufWriter::new(file))?;
    debug!(path = %path.display(), "state diagram written");
    Ok(())
}
