use std::collections::HashMap;

use pest::iterators::Pair;

use crate::error::Result;
use crate::parser::Rule;

/// Maps a label to the index of the instruction it precedes.
pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// Records the statement's label (if any) as pointing at instruction `len`,
/// then hands the instruction itself to `op`. A label on a line of its own
/// carries no instruction and simply attaches to the next one processed.
/// Re-declaring a label overwrites the earlier binding.
pub fn process_labeled_statement<'i, F>(
    pair: Pair<'i, Rule>,
    labels: &mut LabelMap<'i>,
    len: u32,
    op: F,
) -> Result<()>
where
    F: FnOnce(Pair<'i, Rule>) -> Result<()>,
{
    let mut pairs = pair.into_inner();
    let first = pairs.next().unwrap();
    if first.as_rule() == Rule::label {
        let name = first.into_inner().next().unwrap().as_str();
        labels.insert(name, len);
        if let Some(instruction) = pairs.next() {
            op(instruction)?;
        }
    } else {
        op(first)?;
    }

    Ok(())
}
