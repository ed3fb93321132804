//! Table export: TSV text and the clipboard service.

mod clipboard;
mod tsv;

#[allow(unused_imports)]
pub use clipboard::{ClipboardError, ClipboardSink, ClipboardWorker, SystemClipboard};
#[allow(unused_imports)]
pub use tsv::{normal_tsv, to_tsv, transposed_tsv};

#[cfg(test)]
pub(crate) use clipboard::tests::recording_worker;
