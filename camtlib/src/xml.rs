//! Дерево XML с учётом пространств имён и навигация по нему.
//!
//! Документ читается целиком через `quick_xml::NsReader` в собственное дерево
//! `Element`. У каждого элемента есть локальное имя и URI пространства имён,
//! так что префиксы и `{uri}tag` нигде не разбираются вручную.
//!
//! `Navigator` запоминает пространство имён по умолчанию у корня документа и
//! ищет только элементы из него: пути пишутся без префиксов, `Acct/Id/IBAN`.

use crate::error::{CamtError, Result};
use quick_xml::{
    events::{BytesStart, Event},
    name::{Namespace, ResolveResult},
    NsReader,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Разбирает буфер в дерево. Ошибки ридера превращаются в `CamtError::Xml`.
    pub fn parse(data: &[u8]) -> Result<Element> {
        // текст хранится как есть, обрезка только в `Element::text`
        let mut reader = NsReader::from_reader(data);
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
            match event {
                Event::Start(e) => stack.push(Element::open(&ns, &e)?),
                Event::Empty(e) => {
                    let el = Element::open(&ns, &e)?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::End(_) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| CamtError::Xml("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(CamtError::Xml(format!("unclosed element '{}'", open.name)));
        }
        root.ok_or_else(|| CamtError::Xml("document has no root element".into()))
    }

    fn open(ns: &ResolveResult, e: &BytesStart) -> Result<Element> {
        let namespace = match ns {
            ResolveResult::Bound(Namespace(uri)) => {
                Some(String::from_utf8_lossy(uri).into_owned())
            }
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(CamtError::Xml(format!(
                    "unknown namespace prefix '{}'",
                    String::from_utf8_lossy(prefix)
                )))
            }
        };

        let name = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|err| CamtError::Xml(err.to_string()))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| CamtError::Xml(err.to_string()))?;
            // объявления xmlns уже учтены ридером
            if attr.key.as_ref().starts_with(b"xmlns") {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            namespace,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    pub fn local_name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Собственный текст элемента (без текста потомков).
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Текст элемента вместе с пробелами по краям.
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(CamtError::Xml("more than one root element".into())),
    }
    Ok(())
}

/// Результат поиска одного узла. Отсутствие узла — нормальный исход, не ошибка.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Element),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn node(self) -> Option<&'a Element> {
        match self {
            Lookup::Found(node) => Some(node),
            Lookup::NotFound => None,
        }
    }

    pub fn text(self) -> Option<&'a str> {
        self.node().map(Element::text)
    }
}

/// Запросы по путям внутри пространства имён документа.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    namespace: Option<String>,
}

impl Navigator {
    pub fn for_root(root: &Element) -> Self {
        Navigator {
            namespace: root.namespace.clone(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn matches(&self, node: &Element, step: &str) -> bool {
        node.name == step && node.namespace == self.namespace
    }

    /// Прямые потомки узла из пространства имён документа.
    pub fn children<'a>(&'a self, node: &'a Element) -> impl Iterator<Item = &'a Element> + 'a {
        node.children
            .iter()
            .filter(move |c| c.namespace == self.namespace)
    }

    /// Все совпадения относительного пути в порядке документа.
    pub fn query_all<'a>(&self, node: &'a Element, path: &str) -> Vec<&'a Element> {
        let mut frontier = vec![node];
        for step in steps(path) {
            frontier = frontier
                .into_iter()
                .flat_map(|n| n.children.iter())
                .filter(|c| self.matches(c, step))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }
        frontier
    }

    /// Первое совпадение пути или `Lookup::NotFound`.
    pub fn query_one<'a>(&self, node: &'a Element, path: &str) -> Lookup<'a> {
        let steps: Vec<&str> = steps(path).collect();
        match self.first(node, &steps) {
            Some(found) => Lookup::Found(found),
            None => Lookup::NotFound,
        }
    }

    fn first<'a>(&self, node: &'a Element, steps: &[&str]) -> Option<&'a Element> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(node);
        };
        node.children
            .iter()
            .filter(|c| self.matches(c, step))
            .find_map(|c| self.first(c, rest))
    }

    /// Текст первого совпадения пути.
    pub fn query_text<'a>(&self, node: &'a Element, path: &str) -> Option<&'a str> {
        self.query_one(node, path).text()
    }

    pub fn local_tag<'a>(&self, node: &'a Element) -> &'a str {
        node.local_name()
    }

    pub fn expect_tag(&self, node: &Element, name: &str) -> Result<()> {
        if node.local_name() == name {
            Ok(())
        } else {
            Err(CamtError::Structure {
                expected: name.to_string(),
                actual: node.local_name().to_string(),
            })
        }
    }
}

fn steps(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
