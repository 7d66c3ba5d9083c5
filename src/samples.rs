//! Sample documents for testing and demonstration.
//!
//! Each sample exercises a different input shape: plain blank-line
//! paragraphs, `<p>` markup with Windows line endings, and content that was
//! paginated before.

/// `n` copies of `"word"` separated by single spaces.
pub fn filler_paragraph(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// One filler paragraph per entry of `word_counts`, separated by blank lines.
pub fn filler_document(word_counts: &[usize]) -> String {
    word_counts
        .iter()
        .map(|&n| filler_paragraph(n))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Plain-text essay with blank-line paragraphs and irregular spacing.
pub fn essay() -> &'static str {
    "The lighthouse keeper kept a ledger of every ship that passed the point.  \
Some nights there were none, and he wrote the date and a single dash.\n\
Other nights the harbour was crowded with lamps.\n\
\n\
In the spring of that year the ledger ran out of pages. He sewed a second \
book to the first with fishing line and carried on writing, smaller now, \
in a hand that leaned further to the right with every entry.\n\
\n\
Nobody asked to read it.\n\
\n\
When the keeper retired the harbour master took the books home and read \
them over a long winter. He found the storms recorded to the hour, \
the wrecks that never happened, and in the margins a list of birds \
that had rested on the rail of the lamp room.\n\
\n\
He gave the books to the town library, where they sit on a low shelf \
beside the tide tables."
}

/// Article marked up with bare `<p>` elements and `\r\n` line endings.
pub fn html_article() -> &'static str {
    "<p>Rust makes it easy to write small tools that do one thing well.</p>\r\n\
<p>This article walks through splitting long posts into pages so readers \
are not faced with a wall of text. Each page ends at a paragraph boundary \
and none is allowed to grow far past the preferred length.</p>\r\n\
<p>The counting is done per paragraph. Words are whatever sits between \
runs of whitespace, so punctuation stays attached to its word.</p>\r\n\
<p class=\"aside\">Paragraphs with attributes are left as they are.</p>\r\n\
<p>The last paragraph never ends a page, because there is nothing after it.</p>"
}

/// Content that already carries page-break markers.
pub fn already_paginated() -> &'static str {
    "First page has a few words.<!--nextpage-->\n\n\
Second page also has a few words.<!--nextpage-->\n\n\
The third and final page."
}
