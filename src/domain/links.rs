//! Static reference links for the Extras view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLink {
    pub title: &'static str,
    pub url: &'static str,
}

const fn link(title: &'static str, url: &'static str) -> ReferenceLink {
    ReferenceLink { title, url }
}

pub const DAILY_MARKET_PREDICTIONS: [ReferenceLink; 3] = [
    link("Daily Forex Market Outlook", "https://www.dailyfx.com/forex-market-news"),
    link("Forex Economic Forecast", "https://www.fxstreet.com/economic-calendar"),
    link("Investing.com Forex News", "https://www.investing.com/forex/news"),
];

pub const IMPORTANT_ECONOMIC_PAPERS: [ReferenceLink; 3] = [
    link("BIS Quarterly Review", "https://www.bis.org/publ/qtrpdf/r_qt2212.htm"),
    link("IMF Global Financial Stability Report", "https://www.imf.org/en/Publications/GFSR"),
    link("OECD Economic Outlook", "https://www.oecd.org/economic-outlook/"),
];

pub const YOUTUBE_CHANNELS: [ReferenceLink; 5] = [
    link("Bloomberg Markets and Finance", "https://www.youtube.com/user/Bloomberg"),
    link("ForexSignals TV", "https://www.youtube.com/c/ForexSignalsTV"),
    link("DailyFX - Forex Trading News", "https://www.youtube.com/c/DailyFX"),
    link("The Trading Channel", "https://www.youtube.com/c/TheTradingChannel"),
    link("Investing.com", "https://www.youtube.com/user/investingdotcom"),
];

/// A titled group of links rendered as one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSection {
    pub heading: &'static str,
    pub links: Vec<ReferenceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCatalog {
    pub sections: Vec<LinkSection>,
    pub footer_tip: &'static str,
}

impl Default for LinkCatalog {
    fn default() -> Self {
        Self {
            sections: vec![
                LinkSection {
                    heading: "Daily Market Predictions",
                    links: DAILY_MARKET_PREDICTIONS.to_vec(),
                },
                LinkSection {
                    heading: "Important Economic Papers",
                    links: IMPORTANT_ECONOMIC_PAPERS.to_vec(),
                },
                LinkSection {
                    heading: "YouTube Channels for Morning Forex News & Analysis",
                    links: YOUTUBE_CHANNELS.to_vec(),
                },
            ],
            footer_tip: "Check these channels early in your day for fresh market insights and updates.",
        }
    }
}
