//! Embedded reference tables for World Cup team normalization.
//!
//! The ranking list mirrors the last published FIFA ranking snapshot and is
//! used when no ranking file is configured.

use crate::reference::Confederation::{self, AFC, CAF, CONCACAF, CONMEBOL, OFC, UEFA};

/// (dissolved team, dissolution year, successor, confederation)
pub const HISTORICAL_TEAMS: &[(&str, i32, Option<&str>, Confederation)] = &[
    ("Soviet Union", 1991, Some("Russia"), UEFA),
    ("Yugoslavia", 2003, Some("Serbia"), UEFA),
    ("Czechoslovakia", 1993, Some("Czech Republic"), UEFA),
    ("Serbia-Montenegro", 2006, Some("Serbia"), UEFA),
    // East Germany only. FRG is the legal continuation of Germany and lives in ALIASES.
    ("GDR", 1990, Some("Germany"), UEFA),
    ("Saarland", 1956, Some("Germany"), UEFA),
    ("Irish Free State", 1936, Some("Republic of Ireland"), UEFA),
    ("Zaire", 1997, Some("Congo DR"), CAF),
    ("Dahomey", 1975, Some("Benin"), CAF),
    ("Upper Volta", 1984, Some("Burkina Faso"), CAF),
    ("Rhodesia", 1980, Some("Zimbabwe"), CAF),
    ("Dutch East Indies", 1945, Some("Indonesia"), AFC),
    ("North Yemen", 1990, Some("Yemen"), AFC),
    ("South Yemen", 1990, Some("Yemen"), AFC),
    ("South Vietnam", 1976, Some("Vietnam"), AFC),
    ("Dutch Guyana", 1975, Some("Suriname"), CONMEBOL),
    ("Dutch Antilles", 2010, None, CONCACAF),
    ("Western Samoa", 1997, Some("Samoa"), OFC),
];

/// Members missing from the ranking snapshot (unranked or suspended).
pub const ADDITIONAL_TEAMS: &[(&str, Confederation)] = &[
    ("Cook Islands", OFC),
    ("Tuvalu", OFC),
    ("Tonga", OFC),
    ("Turks and Caicos", CONCACAF),
];

/// Bracket and schedule tokens that never name a team.
pub const PLACEHOLDERS: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8",
    "A", "B", "C", "D",
    "A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2",
    "E1", "E2", "F1", "F2", "G1", "G2", "H1", "H2",
    "WINNER X", "WINNER Y", "LOSER X", "LOSER Y",
];

pub const FIFA_RANKING: &[(&str, Confederation)] = &[
    ("Afghanistan", AFC),
    ("Albania", UEFA),
    ("Algeria", CAF),
    ("American Samoa", OFC),
    ("Andorra", UEFA),
    ("Angola", CAF),
    ("Anguilla", CONCACAF),
    ("Antigua and Barbuda", CONCACAF),
    ("Argentina", CONMEBOL),
    ("Armenia", UEFA),
    ("Aruba", CONCACAF),
    ("Australia", AFC),
    ("Austria", UEFA),
    ("Azerbaijan", UEFA),
    ("Bahamas", CONCACAF),
    ("Bahrain", AFC),
    ("Bangladesh", AFC),
    ("Barbados", CONCACAF),
    ("Belarus", UEFA),
    ("Belgium", UEFA),
    ("Belize", CONCACAF),
    ("Benin", CAF),
    ("Bermuda", CONCACAF),
    ("Bhutan", AFC),
    ("Bolivia", CONMEBOL),
    ("Bosnia and Herzegovina", UEFA),
    ("Botswana", CAF),
    ("Brazil", CONMEBOL),
    ("British Virgin Islands", CONCACAF),
    ("Brunei Darussalam", AFC),
    ("Bulgaria", UEFA),
    ("Burkina Faso", CAF),
    ("Burundi", CAF),
    ("Cabo Verde", CAF),
    ("Cambodia", AFC),
    ("Cameroon", CAF),
    ("Canada", CONCACAF),
    ("Cayman Islands", CONCACAF),
    ("Central African Republic", CAF),
    ("Chad", CAF),
    ("Chile", CONMEBOL),
    ("China PR", AFC),
    ("Chinese Taipei", AFC),
    ("Colombia", CONMEBOL),
    ("Comoros", CAF),
    ("Congo", CAF),
    ("Congo DR", CAF),
    ("Costa Rica", CONCACAF),
    ("Croatia", UEFA),
    ("Cuba", CONCACAF),
    ("Curaçao", CONCACAF),
    ("Cyprus", UEFA),
    ("Czech Republic", UEFA),
    ("Côte d'Ivoire", CAF),
    ("Denmark", UEFA),
    ("Djibouti", CAF),
    ("Dominica", CONCACAF),
    ("Dominican Republic", CONCACAF),
    ("Ecuador", CONMEBOL),
    ("Egypt", CAF),
    ("El Salvador", CONCACAF),
    ("England", UEFA),
    ("Equatorial Guinea", CAF),
    ("Eritrea", CAF),
    ("Estonia", UEFA),
    ("Eswatini", CAF),
    ("Ethiopia", CAF),
    ("Faroe Islands", UEFA),
    ("Fiji", OFC),
    ("Finland", UEFA),
    ("France", UEFA),
    ("Gabon", CAF),
    ("Gambia", CAF),
    ("Georgia", UEFA),
    ("Germany", UEFA),
    ("Ghana", CAF),
    ("Gibraltar", UEFA),
    ("Greece", UEFA),
    ("Grenada", CONCACAF),
    ("Guam", AFC),
    ("Guatemala", CONCACAF),
    ("Guinea", CAF),
    ("Guinea-Bissau", CAF),
    ("Guyana", CONCACAF),
    ("Haiti", CONCACAF),
    ("Honduras", CONCACAF),
    ("Hong Kong", AFC),
    ("Hungary", UEFA),
    ("IR Iran", AFC),
    ("Iceland", UEFA),
    ("India", AFC),
    ("Indonesia", AFC),
    ("Iraq", AFC),
    ("Israel", UEFA),
    ("Italy", UEFA),
    ("Jamaica", CONCACAF),
    ("Japan", AFC),
    ("Jordan", AFC),
    ("Kazakhstan", UEFA),
    ("Kenya", CAF),
    ("Korea DPR", AFC),
    ("Korea Republic", AFC),
    ("Kosovo", UEFA),
    ("Kuwait", AFC),
    ("Kyrgyz Republic", AFC),
    ("Laos", AFC),
    ("Latvia", UEFA),
    ("Lebanon", AFC),
    ("Lesotho", CAF),
    ("Liberia", CAF),
    ("Libya", CAF),
    ("Liechtenstein", UEFA),
    ("Lithuania", UEFA),
    ("Luxembourg", UEFA),
    ("Macau", AFC),
    ("Madagascar", CAF),
    ("Malawi", CAF),
    ("Malaysia", AFC),
    ("Maldives", AFC),
    ("Mali", CAF),
    ("Malta", UEFA),
    ("Mauritania", CAF),
    ("Mauritius", CAF),
    ("Mexico", CONCACAF),
    ("Moldova", UEFA),
    ("Mongolia", AFC),
    ("Montenegro", UEFA),
    ("Montserrat", CONCACAF),
    ("Morocco", CAF),
    ("Mozambique", CAF),
    ("Myanmar", AFC),
    ("Namibia", CAF),
    ("Nepal", AFC),
    ("Netherlands", UEFA),
    ("New Caledonia", OFC),
    ("New Zealand", OFC),
    ("Nicaragua", CONCACAF),
    ("Niger", CAF),
    ("Nigeria", CAF),
    ("North Macedonia", UEFA),
    ("Northern Ireland", UEFA),
    ("Norway", UEFA),
    ("Oman", AFC),
    ("Pakistan", AFC),
    ("Palestine", AFC),
    ("Panama", CONCACAF),
    ("Papua New Guinea", OFC),
    ("Paraguay", CONMEBOL),
    ("Peru", CONMEBOL),
    ("Philippines", AFC),
    ("Poland", UEFA),
    ("Portugal", UEFA),
    ("Puerto Rico", CONCACAF),
    ("Qatar", AFC),
    ("Republic of Ireland", UEFA),
    ("Romania", UEFA),
    ("Russia", UEFA),
    ("Rwanda", CAF),
    ("Samoa", OFC),
    ("San Marino", UEFA),
    ("Saudi Arabia", AFC),
    ("Scotland", UEFA),
    ("Senegal", CAF),
    ("Serbia", UEFA),
    ("Seychelles", CAF),
    ("Sierra Leone", CAF),
    ("Singapore", AFC),
    ("Slovakia", UEFA),
    ("Slovenia", UEFA),
    ("Solomon Islands", OFC),
    ("Somalia", CAF),
    ("South Africa", CAF),
    ("South Sudan", CAF),
    ("Spain", UEFA),
    ("Sri Lanka", AFC),
    ("St. Kitts and Nevis", CONCACAF),
    ("St. Lucia", CONCACAF),
    ("St. Vincent / Grenadines", CONCACAF),
    ("Sudan", CAF),
    ("Suriname", CONCACAF),
    ("Sweden", UEFA),
    ("Switzerland", UEFA),
    ("Syria", AFC),
    ("São Tomé and Príncipe", CAF),
    ("Tahiti", OFC),
    ("Tajikistan", AFC),
    ("Tanzania", CAF),
    ("Thailand", AFC),
    ("Timor-Leste", AFC),
    ("Togo", CAF),
    ("Trinidad and Tobago", CONCACAF),
    ("Tunisia", CAF),
    ("Turkey", UEFA),
    ("Turkmenistan", AFC),
    ("US Virgin Islands", CONCACAF),
    ("USA", CONCACAF),
    ("Uganda", CAF),
    ("Ukraine", UEFA),
    ("United Arab Emirates", AFC),
    ("Uruguay", CONMEBOL),
    ("Uzbekistan", AFC),
    ("Vanuatu", OFC),
    ("Venezuela", CONMEBOL),
    ("Vietnam", AFC),
    ("Wales", UEFA),
    ("Yemen", AFC),
    ("Zambia", CAF),
    ("Zimbabwe", CAF),
];

/// Raw spelling -> FIFA name. Order matters: it is the order aliases are
/// reported in for each team.
pub const ALIASES: &[(&str, &str)] = &[
    ("C�te d'Ivoire", "Côte d'Ivoire"),
    ("Cï¿½te d'Ivoire", "Côte d'Ivoire"),
    ("rn\">Bosnia and Herzegovina", "Bosnia and Herzegovina"),
    ("\"rn\"\">Bosnia and Herzegovina\"", "Bosnia and Herzegovina"),
    ("Afghanistan (افغانستان)", "Afghanistan"),
    ("Albania (Shqipëri)", "Albania"),
    ("Algeria (الجزائر)", "Algeria"),
    ("Armenia (Հdelays)", "Armenia"),
    ("Austria (Österreich)", "Austria"),
    ("Azerbaijan (Azərbaycan)", "Azerbaijan"),
    ("Bahrain (البحرين)", "Bahrain"),
    ("Bangladesh (বাংলাদেশ)", "Bangladesh"),
    ("Belarus (Беларусь)", "Belarus"),
    ("Belgium (België)", "Belgium"),
    ("Benin (Bénin)", "Benin"),
    ("Bosnia-Herzegovina (Bosna i Hercegovina)", "Bosnia and Herzegovina"),
    ("Brazil (Brasil)", "Brazil"),
    ("Brunei (بروني)", "Brunei Darussalam"),
    ("Bulgaria (България)", "Bulgaria"),
    ("Cambodia (កម្ពុជា)", "Cambodia"),
    ("Cameroon (Cameroun)", "Cameroon"),
    ("Cape Verde (Cabo Verde)", "Cabo Verde"),
    ("Central African Republic (Centrafrique)", "Central African Republic"),
    ("Chad (Tchad / تشاد)", "Chad"),
    ("China (中国)", "China PR"),
    ("Comoros (جزر القمر)", "Comoros"),
    ("Croatia (Hrvatska)", "Croatia"),
    ("Cyprus (Κύπρος)", "Cyprus"),
    ("Czech Republic (Česká Republika)", "Czech Republic"),
    ("Czechoslovakia (Československo)", "Czechoslovakia"),
    ("D.R. Congo (R.D. Congo)", "Congo DR"),
    ("Denmark (Danmark)", "Denmark"),
    ("Djibouti (جيبوتي)", "Djibouti"),
    ("Dominican Republic (República Dominicana)", "Dominican Republic"),
    ("Dutch Antilles (Nederlandse Antillen)", "Dutch Antilles"),
    ("Dutch East Indies (Nederlands-Indië)", "Dutch East Indies"),
    ("Dutch Guyana (Nederlands Guyana)", "Dutch Guyana"),
    ("East Timor (Timor-Leste)", "Timor-Leste"),
    ("Egypt (مصر)", "Egypt"),
    ("Equatorial Guinea (Guinea Ecuatorial)", "Equatorial Guinea"),
    ("Eritrea (ኤርትራ / إرتريا)", "Eritrea"),
    ("Estonia (Eesti)", "Estonia"),
    ("Ethiopia (ኢትዮⵒያ)", "Ethiopia"),
    ("Ethiopia (ኢትዮⵒ)", "Ethiopia"),
    ("Ethiopia (ኢትዮጵያ)", "Ethiopia"),
    ("FRG (BRD / Westdeutschland)", "Germany"),
    ("FRG", "Germany"),
    ("West Germany", "Germany"),
    ("Allemagne de l'Ouest", "Germany"),
    ("BRD", "Germany"),
    ("Westdeutschland", "Germany"),
    ("GDR (DDR / Ostdeutschland)", "GDR"),
    ("East Germany", "GDR"),
    ("Allemagne de l'Est", "GDR"),
    ("DDR", "GDR"),
    ("Ostdeutschland", "GDR"),
    ("Germany (Deutschland)", "Germany"),
    ("Faroe Islands (Føroyar)", "Faroe Islands"),
    ("Finland (Suomi)", "Finland"),
    ("Georgia (საქართველო)", "Georgia"),
    ("Greece (Ελλάδα)", "Greece"),
    ("Guinea (Guinée)", "Guinea"),
    ("Guinea-Bissau (Guiné-Bissau)", "Guinea-Bissau"),
    ("Haiti (Haïti)", "Haiti"),
    ("Hong Kong (香港)", "Hong Kong"),
    ("Hungary (Magyarország)", "Hungary"),
    ("Iceland (Ísland)", "Iceland"),
    ("India (भारत)", "India"),
    ("Iran (ایران)", "IR Iran"),
    ("Iraq (العراق)", "Iraq"),
    ("Ireland (Éire)", "Republic of Ireland"),
    ("Irish Free State (Saorstát Éireann)", "Irish Free State"),
    ("Israel (ישראל)", "Israel"),
    ("Italy (Italia)", "Italy"),
    ("Ivory Coast (Côte d'Ivoire)", "Côte d'Ivoire"),
    ("Japan (日本)", "Japan"),
    ("Jordan (الأردن)", "Jordan"),
    ("Kazakhstan (Қазақстан)", "Kazakhstan"),
    ("Kuwait (الكويت)", "Kuwait"),
    ("Kyrgyzstan (Кыргызстан)", "Kyrgyz Republic"),
    ("Laos (ນລາວ)", "Laos"),
    ("Latvia (Latvija)", "Latvia"),
    ("Lebanon (لبنان)", "Lebanon"),
    ("Libya (ليبيا)", "Libya"),
    ("Lithuania (Lietuva)", "Lithuania"),
    ("Luxembourg (Lëtzebuerg)", "Luxembourg"),
    ("Macao (澳门)", "Macau"),
    ("Macedonia (Македонија)", "North Macedonia"),
    ("Madagascar (Madagasikara)", "Madagascar"),
    ("Malawi (Malaŵi)", "Malawi"),
    ("Malaysia (مليسيا)", "Malaysia"),
    ("Maldives (Divehi Rājjēge)", "Maldives"),
    ("Mauritania (موريتانيا)", "Mauritania"),
    ("Mexico (México)", "Mexico"),
    ("Mongolia (Монгол Улс)", "Mongolia"),
    ("Montenegro (Црна Гора)", "Montenegro"),
    ("Morocco (المغرب)", "Morocco"),
    ("Mozambique (Moçambique)", "Mozambique"),
    ("Myanmar (ြမန်မာ)", "Myanmar"),
    ("Nepal (नेपाल)", "Nepal"),
    ("Netherlands (Nederland)", "Netherlands"),
    ("New Caledonia (Nouvelle-Calédonie)", "New Caledonia"),
    ("New Zealand (Aotearoa)", "New Zealand"),
    ("North Korea (조선)", "Korea DPR"),
    ("North Yemen (اليمن)", "North Yemen"),
    ("Northern Ireland (Ulster)", "Northern Ireland"),
    ("Norway (Norge)", "Norway"),
    ("Oman (عمان)", "Oman"),
    ("Pakistan (پاکستان)", "Pakistan"),
    ("Palestine (فلسطين)", "Palestine"),
    ("Panama (Panamá)", "Panama"),
    ("Papua New Guinea (Papua Niugini)", "Papua New Guinea"),
    ("Peru (Perú)", "Peru"),
    ("Philippines (Pilipinas)", "Philippines"),
    ("Poland (Polska)", "Poland"),
    ("Qatar (قطر)", "Qatar"),
    ("Romania (România)", "Romania"),
    ("Russia (Россия)", "Russia"),
    ("Saudi Arabia (العربية السعودية)", "Saudi Arabia"),
    ("Senegal (Sénégal)", "Senegal"),
    ("Serbia (Србија)", "Serbia"),
    ("Serbia-Montenegro (Србија и Црна Гора)", "Serbia-Montenegro"),
    ("Singapore (新加坡)", "Singapore"),
    ("Slovakia (Slovensko)", "Slovakia"),
    ("Slovenia (Slovenija)", "Slovenia"),
    ("Somalia (Soomaaliya)", "Somalia"),
    ("South Africa (Suid-Afrika)", "South Africa"),
    ("South Korea (한국)", "Korea Republic"),
    ("South Vietnam (Việt Nam)", "South Vietnam"),
    ("South Yemen (اليمن)", "South Yemen"),
    ("Soviet Union (СССР)", "Soviet Union"),
    ("Spain (España)", "Spain"),
    ("Sri Lanka (ශ්රී ලංකාව)", "Sri Lanka"),
    ("Sudan (السودان)", "Sudan"),
    ("Surinam (Suriname)", "Suriname"),
    ("Swaziland (Swatini)", "Swaziland"),
    ("Sweden (Sverige)", "Sweden"),
    ("Switzerland (Schweiz / Suisse)", "Switzerland"),
    ("Syria (سوريا)", "Syria"),
    ("Taiwan (台湾)", "Chinese Taipei"),
    ("Tajikistan (Точикистон)", "Tajikistan"),
    ("Thailand (ประเทศไทย)", "Thailand"),
    ("Tunisia (تونس)", "Tunisia"),
    ("Turkey (Türkiye)", "Turkey"),
    ("Turkmenistan (Türkmenistan)", "Turkmenistan"),
    ("Ukraine (Україна)", "Ukraine"),
    ("United Arab Emirates (الإمارات العربية المتحدة)", "United Arab Emirates"),
    ("Upper Volta (Haute-Volta)", "Upper Volta"),
    ("Uzbekistan (Ўзбекистон)", "Uzbekistan"),
    ("Vietnam (Việt Nam)", "Vietnam"),
    ("Wales (Cymru)", "Wales"),
    ("Yemen (اليمن)", "Yemen"),
    ("Yugoslavia (Југославија)", "Yugoslavia"),
    ("Zaire (Zaïre)", "Zaire"),
    ("IR Iran", "IR Iran"),
    ("Iran", "IR Iran"),
    ("Korea Republic", "Korea Republic"),
    ("South Korea", "Korea Republic"),
    ("Antigua", "Antigua and Barbuda"),
    ("Guayana", "Guyana"),
    ("Saint Kitts & Nevis", "St. Kitts and Nevis"),
    ("Saint Lucia", "St. Lucia"),
    ("Saint Vincent & The Grenadines", "St. Vincent / Grenadines"),
    ("São Tomé e Príncipe", "São Tomé and Príncipe"),
    ("United states", "USA"),
    ("Cote d'Ivoire", "Côte d'Ivoire"),
    ("Serbia and Montenegro", "Serbia-Montenegro"),
    ("KOREA REPUBLIC", "Korea Republic"),
];
