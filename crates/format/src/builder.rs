//! Renders a dictionary as an XSL-FO document.
//!
//! Conversion happens in two phases. Every entry is first parsed into resolved nodes,
//! so a malformed entry fails the conversion before any output is built. The parsed
//! entries are then grouped into index partitions and laid out top-down. A partition
//! holds every entry sharing an index letter, even when the collation interleaves them
//! with entries of other letters.

use crate::config::FormatConfig;
use crate::document::{AXF_NAMESPACE, FO_NAMESPACE, FormatDocument, Position};
use crate::element::FormatElementExt;
use crate::error::FormatError;
use crate::resolver::FormatResolver;
use folio_dictionary::{Dictionary, InformationKind, ParsedEquivalent, ParsedPart, ParsedSection, Word};
use folio_dom::{DocumentBuilder, Element, NodeContainer, NodeLike, NodeList, Text, configure};
use folio_markup::Parser;
use indexmap::IndexMap;

/// The only dictionary format version this renderer understands.
pub const SUPPORTED_VERSION: &str = "S";

const POSITIONS: [Position; 2] = [Position::Left, Position::Right];

type FormatNode = NodeLike<Text>;

struct Entry<'w> {
    word: &'w Word,
    part: ParsedPart<FormatNode>,
}

struct Partition<'w> {
    letter: String,
    entries: Vec<Entry<'w>>,
}

pub struct DictionaryFormatBuilder {
    language: String,
    config: FormatConfig,
    document: FormatDocument,
}

impl DocumentBuilder for DictionaryFormatBuilder {
    type Document = FormatDocument;

    fn document(&self) -> &FormatDocument {
        &self.document
    }

    fn document_mut(&mut self) -> &mut FormatDocument {
        &mut self.document
    }
}

impl DictionaryFormatBuilder {
    /// A builder rendering the parts written in `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            config: FormatConfig::default(),
            document: FormatDocument::new(),
        }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn convert(&mut self, dictionary: &Dictionary) -> Result<String, FormatError> {
        if dictionary.settings.version != SUPPORTED_VERSION {
            return Err(FormatError::UnsupportedVersion(dictionary.settings.version.clone()));
        }
        let partitions = self.prepare_partitions(dictionary)?;
        log::info!(
            "Rendering {} entries in {} partitions for language '{}'.",
            partitions.iter().map(|p| p.entries.len()).sum::<usize>(),
            partitions.len(),
            self.language
        );
        let document = self.build_document("fo:root", |this, root| this.build_root(root, partitions));
        Ok(document.to_string())
    }

    fn prepare_partitions<'w>(&self, dictionary: &'w Dictionary) -> Result<Vec<Partition<'w>>, FormatError> {
        let parser = Parser::new(FormatResolver::new(&self.config));
        let mut entries = Vec::with_capacity(dictionary.words.len());
        for word in dictionary.sorted_words() {
            match parser.parse_language(word, &self.language)? {
                Some(part) => entries.push(Entry { word, part }),
                None => log::warn!("Skipping '{}': no part in language '{}'.", word.name, self.language),
            }
        }
        let rule = &self.config.alphabet_partition;
        let mut groups: IndexMap<String, Vec<Entry<'w>>> = IndexMap::new();
        for entry in entries {
            match rule.partition_of(&entry.word.name) {
                Some(letter) => groups.entry(letter).or_default().push(entry),
                None => log::warn!("Skipping '{}': the name has no indexable character.", entry.word.name),
            }
        }
        let partitions: Vec<Partition<'w>> = groups
            .into_iter()
            .map(|(letter, entries)| Partition { letter, entries })
            .collect();
        Ok(partitions)
    }

    fn build_root(&self, root: &mut Element<Text>, partitions: Vec<Partition<'_>>) {
        root.set_attribute("xmlns:fo", FO_NAMESPACE)
            .set_attribute("xmlns:axf", AXF_NAMESPACE)
            .set_attribute("xml:lang", self.language.as_str())
            .set_attribute("font-family", self.config.font_family())
            .set_attribute("font-size", self.config.font_size.as_str())
            .set_attribute("color", self.config.colors.text.as_str())
            .set_attribute("axf:ligature-mode", "all");
        root.append_element("fo:layout-master-set", |set| {
            set.append_child(self.build_page_masters());
        });
        root.append_child(self.build_bookmarks());
        root.append_child(self.build_page_sequence(partitions));
    }

    // --- Layout masters ---

    fn build_page_masters(&self) -> NodeList<Text> {
        let document = self.document();
        let config = &self.config;
        let mut list = self.create_node_list();
        for position in POSITIONS {
            let master = document.create_page_master(
                &config.page_size,
                &config.bleed,
                config.background_image.as_deref(),
                |master| {
                    master.set_attribute("master-name", format!("main.{position}"));
                    master.append_child(document.create_region_body(&config.page_spaces, position, |region| {
                        region
                            .set_attribute("region-name", "main.body")
                            .set_attribute("column-count", "2")
                            .set_attribute("column-gap", config.column_gap.as_str());
                    }));
                    master.append_child(document.create_region_before(&config.header_extent, |region| {
                        region
                            .set_attribute("region-name", format!("main.{position}-header"))
                            .set_attribute("precedence", "true");
                    }));
                    master.append_child(document.create_region_after(&config.footer_extent, |region| {
                        region
                            .set_attribute("region-name", format!("main.{position}-footer"))
                            .set_attribute("precedence", "true");
                    }));
                    let name_side = |region: &mut Element<Text>| {
                        region.set_attribute("region-name", format!("main.{position}-side"));
                    };
                    let side = match position {
                        Position::Left => document.create_region_start(&config.side_extent, name_side),
                        Position::Right => document.create_region_end(&config.side_extent, name_side),
                    };
                    master.append_child(side);
                },
            );
            list.append_child(master);
        }
        list.append_element("fo:page-sequence-master", |master| {
            master.set_attribute("master-name", "section");
            master.append_element("fo:repeatable-page-master-alternatives", |alternatives| {
                alternatives.append_element("fo:conditional-page-master-reference", |reference| {
                    reference
                        .set_attribute("master-reference", "main.left")
                        .set_attribute("odd-or-even", "even");
                });
                alternatives.append_element("fo:conditional-page-master-reference", |reference| {
                    reference
                        .set_attribute("master-reference", "main.right")
                        .set_attribute("odd-or-even", "odd");
                });
            });
        });
        list
    }

    fn build_bookmarks(&self) -> Element<Text> {
        let rule = &self.config.alphabet_partition;
        configure(self.create_element("fo:bookmark-tree"), |tree| {
            for letter in self.config.index_letters() {
                tree.append_element("fo:bookmark", |bookmark| {
                    bookmark.set_attribute("internal-destination", format!("alphabet-{letter}"));
                    bookmark.append_element("fo:bookmark-title", |title| {
                        title.append_text_node(rule.label_of(&letter));
                    });
                });
            }
        })
    }

    // --- Page sequence and static content ---

    fn build_page_sequence(&self, partitions: Vec<Partition<'_>>) -> Element<Text> {
        configure(self.create_element("fo:page-sequence"), |sequence| {
            sequence
                .set_attribute("master-reference", "section")
                .set_attribute("initial-page-number", "auto-even");
            for position in POSITIONS {
                sequence.append_element("fo:static-content", |content| {
                    content.set_attribute("flow-name", format!("main.{position}-header"));
                    content.append_child(self.build_header(position));
                });
            }
            for position in POSITIONS {
                sequence.append_element("fo:static-content", |content| {
                    content.set_attribute("flow-name", format!("main.{position}-footer"));
                    content.append_child(self.build_footer(position));
                });
            }
            for position in POSITIONS {
                sequence.append_element("fo:static-content", |content| {
                    content.set_attribute("flow-name", format!("main.{position}-side"));
                    content.append_child(self.build_side(position));
                });
            }
            sequence.append_element("fo:flow", |flow| {
                flow.set_attribute("flow-name", "main.body");
                flow.append_element("fo:block", |block| {
                    block.append_child(self.build_dictionary(partitions));
                });
            });
        })
    }

    fn build_header(&self, position: Position) -> Element<Text> {
        let config = &self.config;
        let (margin_left, margin_right) = position.margins(&config.page_spaces.outer, &config.page_spaces.inner);
        configure(self.create_element("fo:block-container"), |outer| {
            outer
                .set_attribute("height", format!("{} + {}", config.header_extent, config.bleed))
                .set_attribute("margin-top", format!("-1 * {}", config.bleed))
                .set_attribute("margin-left", format!("-1 * {}", config.bleed))
                .set_attribute("margin-right", format!("-1 * {}", config.bleed))
                .set_attribute("display-align", "after");
            outer.append_element("fo:block-container", |inner| {
                inner
                    .set_attribute("margin-left", margin_left)
                    .set_attribute("margin-right", margin_right)
                    .set_attribute("border-bottom-width", "0.2mm")
                    .set_attribute("border-bottom-color", config.colors.highlight.as_str())
                    .set_attribute("border-bottom-style", "solid");
                inner.append_element("fo:block", |block| {
                    block
                        .reset_indent()
                        .set_attribute("padding-bottom", "0.2mm")
                        .set_attribute("font-weight", "bold")
                        .set_attribute("text-align-last", "justify");
                    block.append_child(self.build_shaleian_text(|inline| {
                        inline.append_element("fo:retrieve-marker", |marker| {
                            set_retrieve_marker(marker, "name", "first-including-carryover");
                        });
                    }));
                    block.append_element("fo:leader", |leader| {
                        leader.set_attribute("leader-pattern", "space");
                    });
                    block.append_child(self.build_shaleian_text(|inline| {
                        inline.append_element("fo:retrieve-marker", |marker| {
                            set_retrieve_marker(marker, "name", "last-starting-within-page");
                        });
                    }));
                });
            });
        })
    }

    fn build_footer(&self, position: Position) -> Element<Text> {
        let config = &self.config;
        let (margin_left, margin_right) = position.margins(&config.page_spaces.outer, &config.page_spaces.inner);
        configure(self.create_element("fo:block-container"), |outer| {
            outer
                .set_attribute("height", format!("{} + {}", config.footer_extent, config.bleed))
                .set_attribute("margin-bottom", format!("-1 * {}", config.bleed))
                .set_attribute("margin-left", format!("-1 * {}", config.bleed))
                .set_attribute("margin-right", format!("-1 * {}", config.bleed))
                .set_attribute("display-align", "before");
            outer.append_element("fo:block-container", |inner| {
                inner
                    .set_attribute("margin-left", margin_left)
                    .set_attribute("margin-right", margin_right)
                    .set_attribute("border-top-width", "0.2mm")
                    .set_attribute("border-top-color", config.colors.highlight.as_str())
                    .set_attribute("border-top-style", "solid");
                inner.append_element("fo:block", |block| {
                    block
                        .reset_indent()
                        .set_attribute("font-family", config.fonts.special.as_str())
                        .set_attribute("font-size", "1.1em")
                        .set_attribute("font-weight", "bold")
                        .set_attribute("text-align", "center")
                        .fix_text_position();
                    block.append_element("fo:page-number", |_| {});
                });
            });
        })
    }

    fn build_side(&self, position: Position) -> Element<Text> {
        let config = &self.config;
        let body_height = format!(
            "{} - {} - {}",
            config.page_size.height, config.page_spaces.top, config.page_spaces.bottom
        );
        let index_count = config.alphabets.chars().count();
        configure(self.create_element("fo:block-container"), |container| {
            container
                .set_attribute("width", format!("{} + {}", config.side_extent, config.bleed))
                .set_attribute("height", body_height.as_str())
                .set_attribute("margin-top", format!("{} - {}", config.page_spaces.top, config.header_extent))
                .set_attribute(format!("margin-{position}"), format!("-1 * {}", config.bleed));
            container.append_element("fo:block", |block| {
                block
                    .set_attribute(
                        "margin-top",
                        format!(
                            "({} - {} * {} - {} * {}) div 2",
                            body_height,
                            config.alphabet_index_height,
                            index_count,
                            config.alphabet_index_gap,
                            index_count.saturating_sub(1)
                        ),
                    )
                    .set_attribute("margin-top.conditionality", "retain");
                block.append_element("fo:retrieve-marker", |marker| {
                    set_retrieve_marker(marker, &format!("{position}-side"), "first-starting-within-page");
                });
            });
        })
    }

    // --- Body ---

    fn build_dictionary(&self, partitions: Vec<Partition<'_>>) -> NodeList<Text> {
        let mut list = self.create_node_list();
        for partition in partitions {
            log::debug!("Partition '{}' holds {} entries.", partition.letter, partition.entries.len());
            list.append_child(self.build_partition(partition));
        }
        list
    }

    fn build_partition(&self, partition: Partition<'_>) -> Element<Text> {
        let config = &self.config;
        let Partition { letter, entries } = partition;
        configure(self.create_element("fo:block"), |block| {
            block
                .set_attribute("id", format!("alphabet-{letter}"))
                .set_attribute("break-before", "page")
                .set_attribute("break-after", "page");
            block.append_element("fo:marker", |marker| {
                marker.set_attribute("marker-class-name", "alphabet");
                marker.append_text_node(&letter);
            });
            for position in POSITIONS {
                block.append_element("fo:marker", |marker| {
                    marker.set_attribute("marker-class-name", format!("{position}-side"));
                    marker.append_element("fo:block", |inner| {
                        inner.append_child(self.build_alphabet_indexes(&letter, position));
                    });
                });
            }
            block.append_element("fo:block", |title| {
                title
                    .set_attribute("space-after", "2mm")
                    .set_attribute("space-after.conditionality", "retain")
                    .set_attribute("text-align-last", "center")
                    .set_attribute("span", "all");
                title.append_element("fo:inline-container", |container| {
                    container.set_attribute("width", "30%");
                    container.append_element("fo:block", |heading| {
                        heading
                            .set_attribute("font-size", "200%")
                            .set_attribute("font-weight", "bold")
                            .set_attribute("border-top-width", "0.6mm")
                            .set_attribute("border-bottom-width", "0.6mm")
                            .set_attribute("border-top-color", config.colors.highlight.as_str())
                            .set_attribute("border-bottom-color", config.colors.highlight.as_str())
                            .set_attribute("border-top-style", "double")
                            .set_attribute("border-bottom-style", "double");
                        heading.append_child(self.build_shaleian_text(|inline| {
                            inline.append_text_node(config.alphabet_partition.label_of(&letter));
                        }));
                    });
                });
            });
            for entry in entries {
                block.append_child(self.build_word(entry));
            }
        })
    }

    fn build_alphabet_indexes(&self, letter: &str, position: Position) -> NodeList<Text> {
        let config = &self.config;
        let opposite = position.opposite();
        let mut list = self.create_node_list();
        for current in config.index_letters() {
            list.append_element("fo:block-container", |container| {
                container
                    .set_attribute("space-before", config.alphabet_index_gap.as_str())
                    .set_attribute("height", config.alphabet_index_height.as_str())
                    .set_attribute(format!("padding-{position}"), format!("2mm + {}", config.bleed))
                    .set_attribute(format!("axf:border-top-{opposite}-radius"), "1mm")
                    .set_attribute(format!("axf:border-bottom-{opposite}-radius"), "1mm")
                    .set_attribute("display-align", "center");
                if current == letter {
                    container
                        .set_attribute("font-size", "130%")
                        .set_attribute("font-weight", "bold")
                        .set_attribute("color", "white")
                        .set_attribute("background-color", config.colors.highlight.as_str());
                } else {
                    container.set_attribute("color", config.colors.highlight.as_str());
                }
                container.append_element("fo:block", |block| {
                    block.set_attribute("text-align", "center");
                    block.append_element("fo:basic-link", |link| {
                        link.set_attribute("internal-destination", format!("alphabet-{current}"));
                        link.append_child(self.build_shaleian_text(|inline| {
                            inline.set_attribute("font-family", config.fonts.european_shaleian.as_str());
                            inline.append_text_node(&current);
                        }));
                    });
                });
            });
        }
        list
    }

    fn build_word(&self, entry: Entry<'_>) -> Element<Text> {
        let config = &self.config;
        let Entry { word, part } = entry;
        configure(self.create_element("fo:block"), |block| {
            block
                .set_attribute("space-before", "1mm")
                .set_attribute("space-before.conditionality", "discard")
                .set_attribute("space-after", "1mm")
                .set_attribute("space-after.conditionality", "discard")
                .make_elastic("space-before", config.entry_ratios)
                .make_elastic("space-after", config.entry_ratios);
            block.append_element("fo:marker", |marker| {
                marker.set_attribute("marker-class-name", "name");
                marker.append_text_node(&word.name);
            });
            block.append_element("fo:block", |head| {
                head.set_attribute("keep-with-next.within-column", "always")
                    .set_attribute("keep-with-next.within-page", "always");
                head.append_child(self.build_tag(part.sort.as_deref().unwrap_or(""), &config.colors.highlight));
                head.append_element("fo:inline", |name| {
                    name.set_attribute("font-size", "130%")
                        .set_attribute("font-weight", "bold")
                        .set_attribute("color", config.colors.highlight.as_str());
                    name.append_child(self.build_shaleian_text(|inline| {
                        inline.set_attribute("font-family", config.fonts.european_shaleian.as_str());
                        inline.append_text_node(&word.name);
                    }));
                });
                head.append_element("fo:inline", |pronunciation| {
                    pronunciation.set_attribute("space-start", "0.8mm");
                    pronunciation.append_text_node(&format!("/{}/", word.pronunciation));
                });
            });
            for section in part.sections {
                block.append_child(self.build_section(section));
            }
        })
    }

    fn build_section(&self, section: ParsedSection<FormatNode>) -> NodeList<Text> {
        let ParsedSection {
            equivalents,
            informations,
            phrases,
            examples,
        } = section;
        let mut meaning = None;
        let mut usages = Vec::new();
        for information in informations {
            match information.kind {
                InformationKind::Meaning if meaning.is_none() => meaning = Some(information.text),
                InformationKind::Usage => usages.push(information.text),
                _ => {}
            }
        }
        let mut list = self.create_node_list();
        list.append_child(self.build_equivalents(equivalents, meaning));
        for usage in usages {
            list.append_element("fo:block", |block| {
                self.style_paragraph(block);
                block.append_element("fo:inline", |inline| {
                    inline.append_child(usage);
                });
            });
        }
        for phrase in phrases {
            list.append_element("fo:block", |block| {
                self.style_paragraph(block);
                block.append_element("fo:inline", |inline| {
                    inline.append_element("fo:inline", |expression| {
                        expression.set_attribute("font-weight", "bold");
                        expression.append_child(phrase.expression);
                    });
                    inline.append_child(self.build_example_separator());
                    inline.append_child(self.build_equivalent_names(phrase.equivalent_names));
                    if let Some(text) = phrase.text.filter(is_meaningful) {
                        inline.append_child(self.build_equivalent_separator());
                        inline.append_element("fo:inline", |note| {
                            note.append_child(text);
                        });
                    }
                });
            });
        }
        for example in examples {
            list.append_element("fo:block", |block| {
                self.style_paragraph(block);
                block.append_element("fo:inline", |inline| {
                    inline.append_child(example.sentence);
                    inline.append_child(self.build_example_separator());
                    inline.append_child(example.translation);
                });
            });
        }
        list
    }

    fn build_equivalents(&self, equivalents: Vec<ParsedEquivalent<FormatNode>>, meaning: Option<FormatNode>) -> Element<Text> {
        let config = &self.config;
        configure(self.create_element("fo:block"), |block| {
            self.style_paragraph(block);
            for equivalent in equivalents {
                block.append_element("fo:inline", |inline| {
                    inline.set_attribute("space-start", "1.2mm");
                    inline.append_child(self.build_tag(equivalent.category.as_deref().unwrap_or(""), &config.colors.gray));
                    if let Some(frame) = equivalent.frame {
                        inline.append_element("fo:inline", |wrapper| {
                            wrapper
                                .set_attribute("space-end", "0.8mm")
                                .set_attribute("font-size", "80%");
                            wrapper.append_text_node("(").append_child(frame).append_text_node(")");
                        });
                    }
                    inline.append_child(self.build_equivalent_names(equivalent.names));
                });
            }
            if let Some(meaning) = meaning.filter(is_meaningful) {
                block.append_child(self.build_equivalent_separator());
                block.append_element("fo:inline", |inline| {
                    inline.append_child(meaning);
                });
            }
        })
    }

    // --- Fragments ---

    fn style_paragraph(&self, block: &mut Element<Text>) {
        block
            .set_attribute("start-indent", "2mm")
            .set_attribute("widows", "1")
            .set_attribute("orphans", "1")
            .set_attribute("line-height", self.config.line_height.as_str())
            .make_elastic("line-height", self.config.line_ratios)
            .justify_text();
    }

    fn build_equivalent_names(&self, names: Vec<FormatNode>) -> Element<Text> {
        let count = names.len();
        configure(self.create_element("fo:inline"), |inline| {
            for (index, name) in names.into_iter().enumerate() {
                inline.append_element("fo:inline", |bold| {
                    bold.set_attribute("font-weight", "bold");
                    bold.append_child(name);
                });
                if index + 1 != count {
                    inline.append_text_node(", ");
                }
            }
        })
    }

    fn build_tag(&self, label: &str, background_color: &str) -> Element<Text> {
        configure(self.create_element("fo:inline-container"), |container| {
            container.set_attribute("space-end", "1mm");
            container.append_element("fo:block", |block| {
                block
                    .reset_indent()
                    .set_attribute("padding", "0em 0.1em")
                    .set_attribute("font-size", "75%")
                    .set_attribute("color", "white")
                    .set_attribute("background-color", background_color)
                    .set_attribute("axf:border-radius", "0.2em");
                block.append_text_node(label);
            });
        })
    }

    fn build_equivalent_separator(&self) -> Element<Text> {
        self.build_separator("||", "80%", "0.2em")
    }

    fn build_example_separator(&self) -> Element<Text> {
        self.build_separator("▶", "90%", "0.1em")
    }

    fn build_separator(&self, glyph: &str, font_size: &str, lift: &str) -> Element<Text> {
        configure(self.create_element("fo:inline"), |inline| {
            inline
                .set_attribute("space-start", "1mm")
                .set_attribute("space-end", "1mm")
                .set_attribute("font-size", font_size)
                .set_attribute("color", self.config.colors.gray.as_str())
                .set_attribute("relative-position", "relative")
                .set_attribute("bottom", lift);
            inline.append_text_node(glyph);
        })
    }

    fn build_shaleian_text<F>(&self, configure_inline: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        configure(self.create_element("fo:inline"), |inline| {
            inline
                .set_attribute("font-family", self.config.shaleian_font_family())
                .set_attribute("font-size", self.config.shaleian_font_size.as_str());
            configure_inline(inline);
        })
    }
}

/// A `?` stands for a meaning that has not been written yet.
fn is_meaningful(node: &FormatNode) -> bool {
    node.text_content() != "?"
}

fn set_retrieve_marker(marker: &mut Element<Text>, class_name: &str, retrieve_position: &str) {
    marker
        .set_attribute("retrieve-class-name", class_name)
        .set_attribute("retrieve-position", retrieve_position)
        .set_attribute("retrieve-boundary", "page-sequence");
}
