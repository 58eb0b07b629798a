//! Static chapter dataset for the sidebar listing
//!
//! All 114 chapters with their transliterated, English and Arabic names and
//! verse counts. Read-only; the sidebar neither filters nor searches it.

use serde::Serialize;

/// Sidebar entry for one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterInfo {
    pub number: u16,
    pub transliteration: &'static str,
    pub english_name: &'static str,
    pub arabic_name: &'static str,
    pub verse_count: u16,
}

const fn chapter(
    number: u16,
    transliteration: &'static str,
    english_name: &'static str,
    arabic_name: &'static str,
    verse_count: u16,
) -> ChapterInfo {
    ChapterInfo {
        number,
        transliteration,
        english_name,
        arabic_name,
        verse_count,
    }
}

/// Number of chapters in the dataset
pub const CHAPTER_COUNT: usize = 114;

/// Every chapter, ordered by number
pub static CHAPTERS: [ChapterInfo; CHAPTER_COUNT] = [
    chapter(1, "Al-Fatihah", "The Opening", "الفاتحة", 7),
    chapter(2, "Al-Baqarah", "The Cow", "البقرة", 286),
    chapter(3, "Ali 'Imran", "Family of Imran", "آل عمران", 200),
    chapter(4, "An-Nisa", "The Women", "النساء", 176),
    chapter(5, "Al-Ma'idah", "The Table Spread", "المائدة", 120),
    chapter(6, "Al-An'am", "The Cattle", "الأنعام", 165),
    chapter(7, "Al-A'raf", "The Heights", "الأعراف", 206),
    chapter(8, "Al-Anfal", "The Spoils of War", "الأنفال", 75),
    chapter(9, "At-Tawbah", "The Repentance", "التوبة", 129),
    chapter(10, "Yunus", "Jonah", "يونس", 109),
    chapter(11, "Hud", "Hud", "هود", 123),
    chapter(12, "Yusuf", "Joseph", "يوسف", 111),
    chapter(13, "Ar-Ra'd", "The Thunder", "الرعد", 43),
    chapter(14, "Ibrahim", "Abraham", "إبراهيم", 52),
    chapter(15, "Al-Hijr", "The Rocky Tract", "الحجر", 99),
    chapter(16, "An-Nahl", "The Bee", "النحل", 128),
    chapter(17, "Al-Isra", "The Night Journey", "الإسراء", 111),
    chapter(18, "Al-Kahf", "The Cave", "الكهف", 110),
    chapter(19, "Maryam", "Mary", "مريم", 98),
    chapter(20, "Taha", "Ta-Ha", "طه", 135),
    chapter(21, "Al-Anbya", "The Prophets", "الأنبياء", 112),
    chapter(22, "Al-Hajj", "The Pilgrimage", "الحج", 78),
    chapter(23, "Al-Mu'minun", "The Believers", "المؤمنون", 118),
    chapter(24, "An-Nur", "The Light", "النور", 64),
    chapter(25, "Al-Furqan", "The Criterion", "الفرقان", 77),
    chapter(26, "Ash-Shu'ara", "The Poets", "الشعراء", 227),
    chapter(27, "An-Naml", "The Ant", "النمل", 93),
    chapter(28, "Al-Qasas", "The Stories", "القصص", 88),
    chapter(29, "Al-'Ankabut", "The Spider", "العنكبوت", 69),
    chapter(30, "Ar-Rum", "The Romans", "الروم", 60),
    chapter(31, "Luqman", "Luqman", "لقمان", 34),
    chapter(32, "As-Sajdah", "The Prostration", "السجدة", 30),
    chapter(33, "Al-Ahzab", "The Combined Forces", "الأحزاب", 73),
    chapter(34, "Saba", "Sheba", "سبأ", 54),
    chapter(35, "Fatir", "Originator", "فاطر", 45),
    chapter(36, "Ya-Sin", "Ya Sin", "يس", 83),
    chapter(37, "As-Saffat", "Those who set the Ranks", "الصافات", 182),
    chapter(38, "Sad", "The Letter Sad", "ص", 88),
    chapter(39, "Az-Zumar", "The Troops", "الزمر", 75),
    chapter(40, "Ghafir", "The Forgiver", "غافر", 85),
    chapter(41, "Fussilat", "Explained in Detail", "فصلت", 54),
    chapter(42, "Ash-Shuraa", "The Consultation", "الشورى", 53),
    chapter(43, "Az-Zukhruf", "The Ornaments of Gold", "الزخرف", 89),
    chapter(44, "Ad-Dukhan", "The Smoke", "الدخان", 59),
    chapter(45, "Al-Jathiyah", "The Crouching", "الجاثية", 37),
    chapter(46, "Al-Ahqaf", "The Wind-Curved Sandhills", "الأحقاف", 35),
    chapter(47, "Muhammad", "Muhammad", "محمد", 38),
    chapter(48, "Al-Fath", "The Victory", "الفتح", 29),
    chapter(49, "Al-Hujurat", "The Rooms", "الحجرات", 18),
    chapter(50, "Qaf", "The Letter Qaf", "ق", 45),
    chapter(51, "Adh-Dhariyat", "The Winnowing Winds", "الذاريات", 60),
    chapter(52, "At-Tur", "The Mount", "الطور", 49),
    chapter(53, "An-Najm", "The Star", "النجم", 62),
    chapter(54, "Al-Qamar", "The Moon", "القمر", 55),
    chapter(55, "Ar-Rahman", "The Beneficent", "الرحمن", 78),
    chapter(56, "Al-Waqi'ah", "The Inevitable", "الواقعة", 96),
    chapter(57, "Al-Hadid", "The Iron", "الحديد", 29),
    chapter(58, "Al-Mujadila", "The Pleading Woman", "المجادلة", 22),
    chapter(59, "Al-Hashr", "The Exile", "الحشر", 24),
    chapter(60, "Al-Mumtahanah", "She that is to be examined", "الممتحنة", 13),
    chapter(61, "As-Saf", "The Ranks", "الصف", 14),
    chapter(62, "Al-Jumu'ah", "The Congregation, Friday", "الجمعة", 11),
    chapter(63, "Al-Munafiqun", "The Hypocrites", "المنافقون", 11),
    chapter(64, "At-Taghabun", "The Mutual Disillusion", "التغابن", 18),
    chapter(65, "At-Talaq", "The Divorce", "الطلاق", 12),
    chapter(66, "At-Tahrim", "The Prohibition", "التحريم", 12),
    chapter(67, "Al-Mulk", "The Sovereignty", "الملك", 30),
    chapter(68, "Al-Qalam", "The Pen", "القلم", 52),
    chapter(69, "Al-Haqqah", "The Reality", "الحاقة", 52),
    chapter(70, "Al-Ma'arij", "The Ascending Stairways", "المعارج", 44),
    chapter(71, "Nuh", "Noah", "نوح", 28),
    chapter(72, "Al-Jinn", "The Jinn", "الجن", 28),
    chapter(73, "Al-Muzzammil", "The Enshrouded One", "المزمل", 20),
    chapter(74, "Al-Muddaththir", "The Cloaked One", "المدثر", 56),
    chapter(75, "Al-Qiyamah", "The Resurrection", "القيامة", 40),
    chapter(76, "Al-Insan", "The Man", "الإنسان", 31),
    chapter(77, "Al-Mursalat", "The Emissaries", "المرسلات", 50),
    chapter(78, "An-Naba", "The Tidings", "النبأ", 40),
    chapter(79, "An-Nazi'at", "Those who drag forth", "النازعات", 46),
    chapter(80, "'Abasa", "He Frowned", "عبس", 42),
    chapter(81, "At-Takwir", "The Overthrowing", "التكوير", 29),
    chapter(82, "Al-Infitar", "The Cleaving", "الانفطار", 19),
    chapter(83, "Al-Mutaffifin", "The Defrauding", "المطففين", 36),
    chapter(84, "Al-Inshiqaq", "The Sundering", "الانشقاق", 25),
    chapter(85, "Al-Buruj", "The Mansions of the Stars", "البروج", 22),
    chapter(86, "At-Tariq", "The Nightcomer", "الطارق", 17),
    chapter(87, "Al-A'la", "The Most High", "الأعلى", 19),
    chapter(88, "Al-Ghashiyah", "The Overwhelming", "الغاشية", 26),
    chapter(89, "Al-Fajr", "The Dawn", "الفجر", 30),
    chapter(90, "Al-Balad", "The City", "البلد", 20),
    chapter(91, "Ash-Shams", "The Sun", "الشمس", 15),
    chapter(92, "Al-Layl", "The Night", "الليل", 21),
    chapter(93, "Ad-Duhaa", "The Morning Hours", "الضحى", 11),
    chapter(94, "Ash-Sharh", "The Relief", "الشرح", 8),
    chapter(95, "At-Tin", "The Fig", "التين", 8),
    chapter(96, "Al-'Alaq", "The Clot", "العلق", 19),
    chapter(97, "Al-Qadr", "The Power", "القدر", 5),
    chapter(98, "Al-Bayyinah", "The Clear Proof", "البينة", 8),
    chapter(99, "Az-Zalzalah", "The Earthquake", "الزلزلة", 8),
    chapter(100, "Al-'Adiyat", "The Courser", "العاديات", 11),
    chapter(101, "Al-Qari'ah", "The Calamity", "القارعة", 11),
    chapter(102, "At-Takathur", "The Rivalry in World Increase", "التكاثر", 8),
    chapter(103, "Al-'Asr", "The Declining Day", "العصر", 3),
    chapter(104, "Al-Humazah", "The Traducer", "الهمزة", 9),
    chapter(105, "Al-Fil", "The Elephant", "الفيل", 5),
    chapter(106, "Quraysh", "Quraysh", "قريش", 4),
    chapter(107, "Al-Ma'un", "The Small Kindnesses", "الماعون", 7),
    chapter(108, "Al-Kawthar", "The Abundance", "الكوثر", 3),
    chapter(109, "Al-Kafirun", "The Disbelievers", "الكافرون", 6),
    chapter(110, "An-Nasr", "The Divine Support", "النصر", 3),
    chapter(111, "Al-Masad", "The Palm Fiber", "المسد", 5),
    chapter(112, "Al-Ikhlas", "The Sincerity", "الإخلاص", 4),
    chapter(113, "Al-Falaq", "The Daybreak", "الفلق", 5),
    chapter(114, "An-Nas", "Mankind", "الناس", 6),
];

/// All chapters, ordered by number
pub fn all() -> &'static [ChapterInfo] {
    &CHAPTERS
}

/// Find a chapter by its number
pub fn lookup(number: u32) -> Option<&'static ChapterInfo> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    CHAPTERS.get(index)
}

/// Total verse count across the dataset
pub fn total_verses() -> u32 {
    CHAPTERS.iter().map(|c| u32::from(c.verse_count)).sum()
}
