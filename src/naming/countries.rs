//! ISO 3166-1 alpha-2 country codes.

/// Lower-case country code to lower-case country name.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("ad", "andorra"),
    ("ae", "united arab emirates"),
    ("al", "albania"),
    ("am", "armenia"),
    ("ar", "argentina"),
    ("at", "austria"),
    ("au", "australia"),
    ("az", "azerbaijan"),
    ("ba", "bosnia and herzegovina"),
    ("bd", "bangladesh"),
    ("be", "belgium"),
    ("bg", "bulgaria"),
    ("bh", "bahrain"),
    ("bo", "bolivia"),
    ("br", "brazil"),
    ("bs", "bahamas"),
    ("by", "belarus"),
    ("bz", "belize"),
    ("ca", "canada"),
    ("ch", "switzerland"),
    ("cl", "chile"),
    ("cn", "china"),
    ("co", "colombia"),
    ("cr", "costa rica"),
    ("cy", "cyprus"),
    ("cz", "czech republic"),
    ("de", "germany"),
    ("dk", "denmark"),
    ("do", "dominican republic"),
    ("dz", "algeria"),
    ("ec", "ecuador"),
    ("ee", "estonia"),
    ("eg", "egypt"),
    ("es", "spain"),
    ("fi", "finland"),
    ("fr", "france"),
    ("gb", "united kingdom"),
    ("ge", "georgia"),
    ("gr", "greece"),
    ("gt", "guatemala"),
    ("hk", "hong kong"),
    ("hn", "honduras"),
    ("hr", "croatia"),
    ("hu", "hungary"),
    ("id", "indonesia"),
    ("ie", "ireland"),
    ("il", "israel"),
    ("im", "isle of man"),
    ("in", "india"),
    ("iq", "iraq"),
    ("ir", "iran"),
    ("is", "iceland"),
    ("it", "italy"),
    ("je", "jersey"),
    ("jm", "jamaica"),
    ("jo", "jordan"),
    ("jp", "japan"),
    ("ke", "kenya"),
    ("kh", "cambodia"),
    ("kr", "korea"),
    ("kw", "kuwait"),
    ("kz", "kazakhstan"),
    ("la", "laos"),
    ("lb", "lebanon"),
    ("li", "liechtenstein"),
    ("lk", "sri lanka"),
    ("lt", "lithuania"),
    ("lu", "luxembourg"),
    ("lv", "latvia"),
    ("ma", "morocco"),
    ("mc", "monaco"),
    ("md", "moldova"),
    ("me", "montenegro"),
    ("mk", "macedonia"),
    ("mm", "myanmar"),
    ("mn", "mongolia"),
    ("mo", "macao"),
    ("mt", "malta"),
    ("mx", "mexico"),
    ("my", "malaysia"),
    ("ng", "nigeria"),
    ("ni", "nicaragua"),
    ("nl", "netherlands"),
    ("no", "norway"),
    ("np", "nepal"),
    ("nz", "new zealand"),
    ("om", "oman"),
    ("pa", "panama"),
    ("pe", "peru"),
    ("ph", "philippines"),
    ("pk", "pakistan"),
    ("pl", "poland"),
    ("pr", "puerto rico"),
    ("pt", "portugal"),
    ("py", "paraguay"),
    ("qa", "qatar"),
    ("ro", "romania"),
    ("rs", "serbia"),
    ("ru", "russia"),
    ("sa", "saudi arabia"),
    ("se", "sweden"),
    ("sg", "singapore"),
    ("si", "slovenia"),
    ("sk", "slovakia"),
    ("th", "thailand"),
    ("tn", "tunisia"),
    ("tr", "turkey"),
    ("tw", "taiwan"),
    ("ua", "ukraine"),
    ("uk", "united kingdom"),
    ("us", "united states"),
    ("uy", "uruguay"),
    ("uz", "uzbekistan"),
    ("ve", "venezuela"),
    ("vn", "vietnam"),
    ("za", "south africa"),
];

/// Looks up a country name by its two-letter code, case-insensitively.
pub fn country_name(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    COUNTRY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
