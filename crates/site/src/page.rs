// File: crates/site/src/page.rs
// Summary: Static narrative page around the chart: nav bar, sections, headline and author cards.

use std::fmt::{self, Write as _};

use chart_core::dataset::{Headline, HEADLINES, SUBTITLE};
use chart_core::hover::format_value;
use chart_core::svg::xml_escape;
use chart_core::{TrendChart, TrendSource};

use crate::nav::{NavState, Section, HEADER_OFFSET, SCROLL_THRESHOLD};

pub const DOI_URL: &str = "https://doi.org/10.1016/j.jhydrol.2020.125316";
pub const PAPER_TITLE: &str = "Precipitation trends over the southern Andean Altiplano from 1981 to 2018";

pub struct Author {
    pub name: &'static str,
    pub affiliation: &'static str,
}

pub const AUTHORS: [Author; 4] = [
    Author { name: "Juan Antonio Rivera", affiliation: "IANIGLA-CONICET, Argentina" },
    Author { name: "Marianela Pesce", affiliation: "CCT Mendoza, Argentina" },
    Author { name: "Diego Araneo", affiliation: "IANIGLA-CONICET" },
    Author { name: "Maximilian Viale", affiliation: "IANIGLA-CONICET" },
];

const KEY_FINDINGS: [&str; 3] = [
    "Average decrease of 5-10mm per decade.",
    "Increasing frequency of extreme drought years.",
    "Strong correlation with ENSO phases and Antarctic Oscillation.",
];

const STYLE: &str = "body{margin:0;font-family:Georgia,serif;background:#fdfcfb;color:#1e293b}\
nav{position:fixed;top:0;left:0;right:0;display:flex;justify-content:space-between;padding:24px;z-index:50}\
nav.scrolled{background:rgba(255,255,255,.95);padding:16px 24px;box-shadow:0 1px 2px #0002}\
nav a{margin-left:24px;color:#475569;text-decoration:none;text-transform:uppercase;font-size:14px}\
nav a.paper{background:#7c2d12;color:#fff;padding:8px 20px;border-radius:999px}\
nav .links{display:flex;align-items:center}nav .menu{display:none;background:none;border:0;font-size:16px}\
@media(max-width:768px){nav .menu{display:block}nav .links{display:none}\
nav.open .links{display:flex;flex-direction:column;position:absolute;top:100%;left:0;right:0;background:#fff;padding:16px}}\
header{min-height:80vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center}\
section{padding:96px 10%}.dark{background:#0f172a;color:#f1f5f9}\
.cards{display:flex;gap:16px;flex-wrap:wrap}.card{border:1px solid #e2e8f0;border-radius:12px;padding:16px;min-width:140px}\
.card.emph{border-color:#ea580c}.card .value{font-size:28px;color:#9a3412}";

/// What the page says about the chart it embeds.
pub struct PageContent<'a> {
    pub chart_svg: &'a str,
    pub start_year: i32,
    pub end_year: i32,
    pub unit: &'a str,
    pub trend: TrendSource,
    /// The published series; headline figures from the paper are shown only for it.
    pub builtin: bool,
    pub nav: NavState,
}

impl<'a> PageContent<'a> {
    pub fn for_chart(chart: &'a TrendChart, chart_svg: &'a str, builtin: bool) -> Self {
        let obs = chart.mapper.observations();
        Self {
            chart_svg,
            start_year: obs.start_year(),
            end_year: obs.end_year(),
            unit: &chart.unit,
            trend: chart.trend,
            builtin,
            nav: NavState::default(),
        }
    }

    /// Number of yearly observations covered.
    pub fn years(&self) -> i64 { i64::from(self.end_year) - i64::from(self.start_year) + 1 }

    fn trend_note(&self) -> String {
        match self.trend {
            TrendSource::LeastSquares => "Trend line is a least-squares fit of the displayed series.".to_string(),
            TrendSource::Illustrative { start, end } => format!(
                "Trend line is illustrative ({}{unit} to {}{unit}), not fitted to the data.",
                format_value(start),
                format_value(end),
                unit = self.unit
            ),
        }
    }
}

/// Full HTML document with the chart SVG inlined in the trends section.
pub fn render_page(page: &PageContent<'_>) -> Result<String, fmt::Error> {
    let chart_svg = page.chart_svg;
    let nav = &page.nav;
    let mut s = String::with_capacity(chart_svg.len() + 8 * 1024);
    writeln!(s, "<!DOCTYPE html>")?;
    writeln!(s, r#"<html lang="en"><head><meta charset="utf-8">"#)?;
    writeln!(s, "<title>The Drying Andean Altiplano</title><style>{STYLE}</style></head><body>")?;

    let nav_class = match (nav.scrolled, nav.menu_open) {
        (true, true) => "scrolled open",
        (true, false) => "scrolled",
        (false, true) => "open",
        (false, false) => "",
    };
    writeln!(s, r#"<nav class="{nav_class}"><span>ALTIPLANO-CHIRPS</span>"#)?;
    writeln!(
        s,
        r#"<button class="menu" type="button" aria-label="Toggle menu" aria-expanded="{}">Menu</button><div class="links">"#,
        nav.menu_open
    )?;
    for section in Section::ALL {
        if let Some(label) = section.label() {
            writeln!(s, r##"<a href="#{}">{}</a>"##, section.id(), xml_escape(label))?;
        }
    }
    writeln!(s, r#"<a class="paper" href="{DOI_URL}" target="_blank" rel="noopener noreferrer">Read Paper</a></div></nav>"#)?;

    let (first, last, years) = (page.start_year, page.end_year, page.years());
    writeln!(s, "<header><p>Journal of Hydrology &#8226; {first} &#8211; {last}</p>")?;
    writeln!(s, "<h1>The Drying <em>Andean Altiplano</em></h1>")?;
    writeln!(
        s,
        "<p>Analyzing {years} years of precipitation trends over the southern Andean plateau using CHIRPS satellite data and station records.</p>"
    )?;
    writeln!(s, r##"<a href="#context">Explore the trends</a></header><main>"##)?;

    open_section(&mut s, Section::Context, "", "The SAA High Plateau")?;
    writeln!(s, "<ul><li>21&#176;S &#8211; 26&#176;S Latitude</li><li>3,500m &#8211; 6,000m Elevation</li><li>Arid &amp; Semi-Arid Climates</li></ul>")?;
    writeln!(
        s,
        "<p>The Southern Andean Altiplano (SAA) is a unique environment where water is the most precious resource. \
         Bordering Chile, Bolivia, and Argentina, this high-altitude region relies on summer precipitation driven by \
         the South American Monsoon System (SAMS).</p>"
    )?;
    writeln!(
        s,
        "<p>In recent decades this balance has been disrupted. The study identifies a significant <strong>reduction in \
         precipitation</strong>, with severe implications for lithium mining, indigenous agriculture and endemic biodiversity.</p></section>"
    )?;

    open_section(&mut s, Section::Trends, "", "Decadal Decline")?;
    writeln!(
        s,
        "<p>The most pronounced drying occurs in the <strong>summer months (DJF)</strong>, traditionally the peak rainy season.</p><ul>"
    )?;
    for finding in KEY_FINDINGS {
        writeln!(s, "<li>{}</li>", xml_escape(finding))?;
    }
    let caption = if page.builtin {
        SUBTITLE.to_string()
    } else {
        format!("Loaded series ({first}\u{2013}{last})")
    };
    writeln!(s, "</ul><figure>{chart_svg}<figcaption>{}</figcaption></figure>", xml_escape(&caption))?;
    if page.builtin {
        writeln!(s, r#"<div class="cards">"#)?;
        for h in &HEADLINES {
            headline_card(&mut s, h)?;
        }
        writeln!(s, "</div>")?;
    }
    writeln!(s, r#"<p class="trend-note"><small>{}</small></p></section>"#, xml_escape(&page.trend_note()))?;

    open_section(&mut s, Section::Methods, "dark", "CHIRPS Validation")?;
    writeln!(
        s,
        "<p>Hydrological monitoring in the Andes is hindered by sparse weather stations. <strong>CHIRPS</strong> \
         (Climate Hazards Group InfraRed Precipitation with Station data) bridges this gap.</p>"
    )?;
    writeln!(
        s,
        "<p>Validating satellite infrared data against ground stations yields a 0.05&#176; grid covering the entire Southern Altiplano.</p></section>"
    )?;

    open_section(&mut s, Section::Impact, "", "Ecosystems at Risk")?;
    writeln!(
        s,
        "<p>The decline directly impacts <strong>Bofedales</strong> (high-altitude wetlands), critical habitats for Andean flamingos and vicu&#241;as.</p>"
    )?;
    writeln!(
        s,
        "<p>The region is central to the &#8220;Lithium Triangle&#8221;. Less water sharpens conflict between extraction and communities that rely on seasonal recharge.</p></section>"
    )?;

    open_section(&mut s, Section::Authors, "", "Key Contributors")?;
    writeln!(s, r#"<div class="cards">"#)?;
    for a in &AUTHORS {
        writeln!(
            s,
            r#"<div class="card author"><h3>{}</h3><p>{}</p></div>"#,
            xml_escape(a.name),
            xml_escape(a.affiliation)
        )?;
    }
    writeln!(s, "</div></section></main>")?;

    writeln!(
        s,
        "<footer class=\"dark\"><p>Based on &#8220;{}.&#8221; Published in Journal of Hydrology (2020).</p></footer>",
        xml_escape(PAPER_TITLE)
    )?;
    write_script(&mut s)?;
    writeln!(s, "</body></html>")?;
    Ok(s)
}

fn open_section(s: &mut String, section: Section, class: &str, heading: &str) -> fmt::Result {
    writeln!(s, r#"<section id="{}" class="{class}"><h2>{}</h2>"#, section.id(), xml_escape(heading))
}

fn headline_card(s: &mut String, h: &Headline) -> fmt::Result {
    let class = if h.emphasized { "card emph" } else { "card" };
    writeln!(
        s,
        r#"<div class="{class}"><div>{}</div><div class="value">{}</div><div>{}</div></div>"#,
        xml_escape(h.label),
        xml_escape(h.value),
        xml_escape(h.caption)
    )
}

// Same transitions as NavState, for the browser.
fn write_script(s: &mut String) -> fmt::Result {
    writeln!(s, "<script>")?;
    writeln!(s, "const nav=document.querySelector('nav');const menu=nav.querySelector('.menu');")?;
    writeln!(
        s,
        "menu.addEventListener('click',()=>menu.setAttribute('aria-expanded',nav.classList.toggle('open')));"
    )?;
    writeln!(
        s,
        "addEventListener('scroll',()=>nav.classList.toggle('scrolled',scrollY>{SCROLL_THRESHOLD}));"
    )?;
    writeln!(s, "document.querySelectorAll('a[href^=\"#\"]').forEach(a=>a.addEventListener('click',e=>{{")?;
    writeln!(s, "const el=document.getElementById(a.getAttribute('href').slice(1));if(!el)return;")?;
    writeln!(s, "e.preventDefault();nav.classList.remove('open');menu.setAttribute('aria-expanded',false);")?;
    writeln!(
        s,
        "scrollTo({{top:el.getBoundingClientRect().top+pageYOffset-{HEADER_OFFSET},behavior:'smooth'}});}}));"
    )?;
    writeln!(s, "</script>")
}
