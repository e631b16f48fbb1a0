use crossterm::event::Event;
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::components::{Component, ComponentContext, ScrollState, render_scrolled_lines};
use crate::constants::MLS_NUMBER;
use crate::theme::ThemeStyle;
use crate::ui::{UiFrame, wrap_words};

/// Listing shown in the Home window.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyListing {
    pub mls_number: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub price: &'static str,
    pub status: &'static str,
    pub bedrooms: u8,
    pub bathrooms: f32,
    pub sqft: u32,
    pub year_built: u16,
    pub style: &'static str,
    pub fireplaces: u8,
    pub property_type: &'static str,
    pub lot_size: &'static str,
    pub days_on_market: u32,
    pub garage: &'static str,
    pub neighborhood: &'static str,
    pub hoa: &'static str,
    pub interior_features: &'static [&'static str],
    pub flooring: &'static [&'static str],
    pub windows: &'static [&'static str],
    pub exterior_features: &'static [&'static str],
    pub community_features: &'static [&'static str],
    pub description: &'static str,
}

pub const LISTING: PropertyListing = PropertyListing {
    mls_number: MLS_NUMBER,
    address: "105 Beauchamp Lane",
    city: "Lafayette",
    state: "LA",
    zip_code: "70506",
    price: "$440,000",
    status: "Sold",
    bedrooms: 3,
    bathrooms: 2.5,
    sqft: 2257,
    year_built: 2024,
    style: "Traditional",
    fireplaces: 1,
    property_type: "Single Family Home",
    lot_size: "0.17 acres",
    days_on_market: 23,
    garage: "2 Car garage",
    neighborhood: "Beau Savanne",
    hoa: "Yes",
    interior_features: &[
        "High Ceilings",
        "Beamed Ceilings",
        "Bookcases",
        "Built-in Features",
        "Computer Nook",
        "Crown Molding",
        "Double Vanity",
        "Dual Closets",
        "Kitchen Island",
        "Multi-Head Shower",
        "Separate Shower",
        "Special Bath",
        "Standalone Tub",
        "Varied Ceiling Heights",
        "Vaulted Ceiling(s)",
        "Wet Bar",
        "Marble Counters",
    ],
    flooring: &["Marble", "Tile", "Wood"],
    windows: &["Double Pane Windows"],
    exterior_features: &[
        "Covered Patio",
        "Landscaped Yard",
        "Sprinkler System",
        "Fenced Backyard",
    ],
    community_features: &["Clubhouse", "Pool", "Playground"],
    description: indoc! {"
        The sight-lines from every doorway reveals something beautiful to look at, from
        coffered ceilings to crystal encrusted light fixtures. To quote from the 2024 Love
        Our Schools Home Giveaway '...was made possible through the generosity of Manuel
        Builders with the donation of the home construction and Southern Lifestyle
        Development with the donation of the lot in Beau Savanne...This home is valued at
        $525,000 is 2,257 square feet with three bedrooms and two and a half bathrooms and
        a dedicated study' with floor to ceiling bookshelves.
    "},
};

impl PropertyListing {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }

    /// Thousands-separated square footage.
    pub fn sqft_label(&self) -> String {
        let digits = self.sqft.to_string();
        let mut out = String::new();
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

#[derive(Debug, Default)]
pub struct PropertyInfoComponent {
    scroll: ScrollState,
}

impl PropertyInfoComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn lines(width: u16, style: &ThemeStyle) -> Vec<Line<'static>> {
        let listing = &LISTING;
        let width = width.max(1) as usize;
        let mut lines = Vec::new();

        lines.push(Line::styled("Property Information", style.heading));
        lines.push(Line::default());
        lines.push(Line::styled(listing.price, style.accent));
        lines.push(Line::styled(listing.full_address(), style.value));
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", listing.status), style.success),
            Span::styled(format!("  MLS: {}", listing.mls_number), style.value),
        ]));

        section(&mut lines, "Property Details", style);
        let details = [
            ("Bedrooms", listing.bedrooms.to_string()),
            ("Bathrooms", listing.bathrooms.to_string()),
            ("Square Feet", listing.sqft_label()),
            ("Year Built", listing.year_built.to_string()),
            ("Style", listing.style.to_string()),
            ("Fireplaces", listing.fireplaces.to_string()),
        ];
        for (label, value) in details {
            lines.push(field(label, value, style));
        }

        section(&mut lines, "Interior Features", style);
        bullets(&mut lines, listing.interior_features, style);

        section(&mut lines, "Flooring & Windows", style);
        lines.push(Line::styled("Flooring:", style.label));
        badges(&mut lines, listing.flooring, width, style);
        lines.push(Line::styled("Windows:", style.label));
        badges(&mut lines, listing.windows, width, style);

        section(&mut lines, "Exterior Features", style);
        bullets(&mut lines, listing.exterior_features, style);

        section(&mut lines, "Community & Neighborhood", style);
        lines.push(field("Neighborhood", listing.neighborhood.to_string(), style));
        lines.push(field("HOA", listing.hoa.to_string(), style));
        lines.push(Line::styled("Community Features:", style.label));
        badges(&mut lines, listing.community_features, width, style);

        section(&mut lines, "Additional Information", style);
        lines.push(field("Property Type", listing.property_type.to_string(), style));
        lines.push(field("Lot Size", listing.lot_size.to_string(), style));
        lines.push(field(
            "Days on Market",
            listing.days_on_market.to_string(),
            style,
        ));
        lines.push(field("Garage", listing.garage.to_string(), style));

        section(&mut lines, "Description", style);
        for row in wrap_words(listing.description, width) {
            lines.push(Line::styled(row, style.value));
        }
        lines
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str, style: &ThemeStyle) {
    lines.push(Line::default());
    lines.push(Line::styled(title, style.heading));
}

fn field(label: &'static str, value: String, style: &ThemeStyle) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", format!("{label}:")), style.label),
        Span::styled(value, style.value),
    ])
}

fn bullets(lines: &mut Vec<Line<'static>>, items: &[&'static str], style: &ThemeStyle) {
    for item in items {
        lines.push(Line::styled(format!("• {item}"), style.value));
    }
}

/// Badges flow left to right and wrap at `width`.
fn badges(lines: &mut Vec<Line<'static>>, items: &[&'static str], width: usize, style: &ThemeStyle) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for item in items {
        let badge = format!("[{item}]");
        let len = badge.chars().count();
        if used > 0 && used + 1 + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::styled(" ", style.value));
            used += 1;
        }
        spans.push(Span::styled(badge, style.badge));
        used += len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
}

impl Component for PropertyInfoComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        // one column is kept for the scrollbar
        let lines = Self::lines(area.width.saturating_sub(1), ctx.style());
        render_scrolled_lines(frame, area, lines, &mut self.scroll, ctx.style().content);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        self.scroll.handle_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn listing_carries_every_section() {
        let ctx = ComponentContext::for_theme(Theme::ThreeD);
        let lines = text(&PropertyInfoComponent::lines(60, ctx.style()));
        assert!(lines.contains(&"$440,000".to_string()));
        assert!(lines.contains(&"105 Beauchamp Lane, Lafayette, LA 70506".to_string()));
        assert!(lines.iter().any(|l| l.contains("Sold") && l.contains("MLS: 25000227")));
        assert!(lines.iter().any(|l| l.starts_with("Square Feet:") && l.ends_with("2,257")));
        assert!(lines.contains(&"• Marble Counters".to_string()));
        assert!(lines.contains(&"[Marble] [Tile] [Wood]".to_string()));
        assert!(lines.contains(&"[Clubhouse] [Pool] [Playground]".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Neighborhood:") && l.ends_with("Beau Savanne")));
        assert!(lines.iter().any(|l| l.starts_with("Garage:") && l.ends_with("2 Car garage")));
        assert!(lines.iter().any(|l| l.contains("floor to ceiling")));
        assert!(lines.iter().all(|l| l.chars().count() <= 60));
    }

    #[test]
    fn badges_wrap_on_narrow_windows() {
        let ctx = ComponentContext::default();
        let lines = text(&PropertyInfoComponent::lines(12, ctx.style()));
        assert!(lines.contains(&"[Clubhouse]".to_string()));
        assert!(lines.contains(&"[Pool]".to_string()));
    }

    #[test]
    fn sqft_is_grouped() {
        assert_eq!(LISTING.sqft_label(), "2,257");
        assert_eq!(LISTING.interior_features.len(), 17);
    }
}
