// Test fixtures with known texts and expected outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// The four-line sample used when no input is given
pub const SAMPLE_TEXT: &str = "hello world\nthis is a simple test\nhello Java\nhello again world";

/// SAMPLE_TEXT with "hello" replaced by "hi", as written to the output file
pub const SAMPLE_REPLACED: &str = "hi world\nthis is a simple test\nhi Java\nhi again world\n";

/// Expected sorted listing of SAMPLE_TEXT
pub const SAMPLE_LISTING: &str = "Unique Words in File (Sorted Alphabetically):
==================================================
a               : Appears in lines [2]
again           : Appears in lines [4]
hello           : Appears in lines [1, 3, 4]
is              : Appears in lines [2]
java            : Appears in lines [3]
simple          : Appears in lines [2]
test            : Appears in lines [2]
this            : Appears in lines [2]
world           : Appears in lines [1, 4]";

/// Prose with punctuation, mixed case, blank lines and CRLF endings
pub const PUNCTUATED_TEXT: &str = "The cat sat.\r\n\r\nThe Cat's hat -- a CAT hat!\r\n  cat, cat; concat\r\n";

/// PUNCTUATED_TEXT with whole-word "cat" replaced by "dog"
pub const PUNCTUATED_REPLACED: &str = "The dog sat.\n\nThe Cat's hat -- a CAT hat!\n  dog, dog; concat\n";
