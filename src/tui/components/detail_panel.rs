//! # DetailPanel Component
//!
//! Side panel with the full record for the selected country. Stateless:
//! it renders whatever country it is given, and it is simply not rendered
//! at all while nothing is selected. Closing is handled by the event loop
//! (`Esc`/`c` → `Action::ClearSelection`) and touches neither the page nor
//! the filter/sort state.
//!
//! Missing data never errors: absent or empty fields render as "N/A", and
//! a zero population counts as absent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::country_list::format_population;
use crate::source::{Country, Named};
use crate::tui::component::Component;

pub struct DetailPanel<'a> {
    country: &'a Country,
}

impl<'a> DetailPanel<'a> {
    pub fn new(country: &'a Country) -> Self {
        Self { country }
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Gray);

        let mut lines = vec![
            Line::from(Span::styled(
                self.country.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(url) = self.country.flag_url() {
            lines.push(Line::from(vec![
                Span::styled("Flag: ", label),
                Span::styled(url.to_string(), value),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Population: ", label),
            Span::styled(population_text(self.country.population), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Languages: ", label),
            Span::styled(join_names(&self.country.languages), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Currency: ", label),
            Span::styled(join_names(&self.country.currencies), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Capital: ", label),
            Span::styled(text_or_na(self.country.capital.as_deref()).to_string(), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Region: ", label),
            Span::styled(text_or_na(self.country.region.as_deref()).to_string(), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Regional Bloc: ", label),
            Span::styled(join_names(&self.country.regional_blocs), value),
        ]));

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ")
            .title_bottom(Line::from(" Esc Close ").centered());

        let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
    }
}

/// ", "-joined names, or "N/A" when the sequence is absent or empty.
fn join_names(items: &[Named]) -> String {
    if items.is_empty() {
        return "N/A".to_string();
    }
    items
        .iter()
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The value, or "N/A" when it is missing or empty.
fn text_or_na(value: Option<&str>) -> &str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => "N/A",
    }
}

/// Zero counts as absent.
fn population_text(population: u64) -> String {
    if population == 0 {
        "N/A".to_string()
    } else {
        format_population(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Flags;
    use crate::test_support::country;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(country: &Country) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = DetailPanel::new(country);
        terminal
            .draw(|f| {
                panel.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_full_record_renders_every_field() {
        let full = Country {
            name: "Finland".to_string(),
            alpha3_code: "FIN".to_string(),
            population: 5_530_719,
            capital: Some("Helsinki".to_string()),
            region: Some("Europe".to_string()),
            flags: Some(Flags {
                svg: Some("https://flagcdn.com/fi.svg".to_string()),
            }),
            languages: vec![
                Named {
                    name: "Finnish".to_string(),
                },
                Named {
                    name: "Swedish".to_string(),
                },
            ],
            currencies: vec![Named {
                name: "Euro".to_string(),
            }],
            regional_blocs: vec![Named {
                name: "European Union".to_string(),
            }],
        };

        let text = rendered_text(&full);
        assert!(text.contains("Finland"));
        assert!(text.contains("flagcdn.com/fi.svg"));
        assert!(text.contains("5,530,719"));
        assert!(text.contains("Finnish, Swedish"));
        assert!(text.contains("Euro"));
        assert!(text.contains("Helsinki"));
        assert!(text.contains("Europe"));
        assert!(text.contains("European Union"));
        assert!(!text.contains("N/A"));
    }

    #[test]
    fn test_sparse_record_falls_back_to_na() {
        let sparse = country("Atlantis", 0);
        let text = rendered_text(&sparse);
        assert!(text.contains("Atlantis"));
        // Population, languages, currency, capital, region, bloc.
        assert_eq!(text.matches("N/A").count(), 6);
        // No URL means no flag line at all.
        assert!(!text.contains("Flag:"));
    }

    #[test]
    fn test_empty_capital_counts_as_missing() {
        let mut c = country("Nowhere", 10);
        c.capital = Some(String::new());
        let text = rendered_text(&c);
        assert!(text.contains("Capital: N/A"));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(join_names(&[]), "N/A");
        assert_eq!(
            join_names(&[
                Named {
                    name: "Spanish".to_string()
                },
                Named {
                    name: "Quechua".to_string()
                }
            ]),
            "Spanish, Quechua"
        );
        assert_eq!(text_or_na(None), "N/A");
        assert_eq!(text_or_na(Some("")), "N/A");
        assert_eq!(text_or_na(Some("Lima")), "Lima");
        assert_eq!(population_text(0), "N/A");
        assert_eq!(population_text(1_000), "1,000");
    }
}
