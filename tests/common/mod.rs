// tests/common/mod.rs
#![allow(dead_code)]

use quote_scrape::progress::Progress;

/// Keeps every diagnostic so tests can assert on them.
#[derive(Default)]
pub struct Recorder {
    pub logs: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn warn(&mut self, msg: &str) { self.warnings.push(msg.to_string()); }
    fn error(&mut self, msg: &str) { self.errors.push(msg.to_string()); }
}

pub fn quote(text: &str, author: &str) -> String {
    format!(
        r#"<div class="quote" itemscope>
             <span class="text" itemprop="text">{text}</span>
             <span>by <small class="author" itemprop="author">{author}</small>
             <a href="/author/x">(about)</a></span>
             <div class="tags">Tags: <a class="tag" href="/tag/life/">life</a></div>
           </div>"#
    )
}

pub fn quote_without_author(text: &str) -> String {
    format!(r#"<div class="quote"><span class="text">{text}</span></div>"#)
}

pub fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Quotes</title></head>\
         <body><div class=\"container\"><div class=\"col-md-8\">{body}</div></div></body></html>"
    )
}
