//! Static book table: ids, abbreviations, full names and chapter counts.
//!
//! Order is the Synodal canon. Abbreviations go to the exact abbreviation table,
//! `full_names` to the full-name table (and the substring fallback).

/// One row of the book table.
pub struct BookEntry {
    /// Canonical id, equal to the row's position plus one.
    pub id: u8,
    /// Russian abbreviations; the first is canonical.
    pub abbreviations: &'static [&'static str],
    /// English abbreviation used elsewhere in the application.
    pub english: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Accepted full-name spellings.
    pub full_names: &'static [&'static str],
    /// Chapters in the book.
    pub chapters: u32,
}

macro_rules! book {
    ($id:expr, [$($abbr:expr),+], $en:expr, $name:expr, [$($full:expr),*], $chapters:expr) => {
        BookEntry {
            id: $id,
            abbreviations: &[$($abbr),+],
            english: $en,
            name: $name,
            full_names: &[$($full),*],
            chapters: $chapters,
        }
    };
}

/// All 66 books.
pub static BOOKS: &[BookEntry] = &[
    // Old Testament
    book!(1, ["Быт"], "Gen", "Бытие", ["Бытие", "Книга Бытия"], 50),
    book!(2, ["Исх"], "Exod", "Исход", ["Исход"], 40),
    book!(3, ["Лев"], "Lev", "Левит", ["Левит"], 27),
    book!(4, ["Чис"], "Num", "Числа", ["Числа"], 36),
    book!(5, ["Втор"], "Deut", "Второзаконие", ["Второзаконие", "Второзакония"], 34),
    book!(6, ["Нав"], "Josh", "Иисус Навин", ["Иисус Навин", "Иисуса Навина", "Навин"], 24),
    book!(7, ["Суд"], "Judg", "Судьи", ["Судьи", "Судей"], 21),
    book!(8, ["Руф"], "Ruth", "Руфь", ["Руфь"], 4),
    book!(9, ["1Цар"], "1Sam", "1 Царств", ["1 Царств", "Первая Царств"], 31),
    book!(10, ["2Цар"], "2Sam", "2 Царств", ["2 Царств", "Вторая Царств"], 24),
    book!(11, ["3Цар"], "1Kgs", "3 Царств", ["3 Царств", "Третья Царств"], 22),
    book!(12, ["4Цар"], "2Kgs", "4 Царств", ["4 Царств", "Четвертая Царств"], 25),
    book!(13, ["1Пар"], "1Chr", "1 Паралипоменон", ["1 Паралипоменон", "Первая Паралипоменон"], 29),
    book!(14, ["2Пар"], "2Chr", "2 Паралипоменон", ["2 Паралипоменон", "Вторая Паралипоменон"], 36),
    book!(15, ["Езд"], "Ezra", "Ездра", ["Ездра", "Ездры"], 10),
    book!(16, ["Неем"], "Neh", "Неемия", ["Неемия", "Неемии"], 13),
    book!(17, ["Есф"], "Esth", "Есфирь", ["Есфирь", "Естирь", "Естер"], 10),
    book!(18, ["Иов"], "Job", "Иов", ["Иов", "Иова", "Книга Иова"], 42),
    book!(19, ["Пс"], "Ps", "Псалтирь", ["Псалтирь", "Псалмы", "Псалом", "Псалм"], 150),
    book!(20, ["Прит", "Притч"], "Prov", "Притчи", ["Притчи", "Книга Притч", "Притчи Соломона", "Притчи Соломоновы"], 31),
    book!(21, ["Еккл"], "Eccl", "Екклесиаст", ["Екклесиаст"], 12),
    book!(22, ["Песн"], "Song", "Песнь Песней", ["Песнь Песней", "Песни Песней", "Песня Песней"], 8),
    book!(23, ["Ис"], "Isa", "Исаия", ["Исаия", "Исаии"], 66),
    book!(24, ["Иер"], "Jer", "Иеремия", ["Иеремия", "Иеремии"], 52),
    book!(25, ["Плач"], "Lam", "Плач Иеремии", ["Плач Иеремии"], 5),
    book!(26, ["Иез"], "Ezek", "Иезекииль", ["Иезекииль", "Иезекииля"], 48),
    book!(27, ["Дан"], "Dan", "Даниил", ["Даниил", "Даниила"], 12),
    book!(28, ["Ос"], "Hos", "Осия", ["Осия", "Осии"], 14),
    book!(29, ["Иоил"], "Joel", "Иоиль", ["Иоиль", "Иоиля"], 3),
    book!(30, ["Ам"], "Amos", "Амос", ["Амос", "Амоса"], 9),
    book!(31, ["Авд"], "Obad", "Авдий", ["Авдий", "Авдия"], 1),
    book!(32, ["Ион"], "Jonah", "Иона", ["Иона", "Ионы"], 4),
    book!(33, ["Мих"], "Mic", "Михей", ["Михей", "Михея"], 7),
    book!(34, ["Наум"], "Nah", "Наум", ["Наум", "Наума"], 3),
    book!(35, ["Авв"], "Hab", "Аввакум", ["Аввакум", "Аввакума"], 3),
    book!(36, ["Соф"], "Zeph", "Софония", ["Софония", "Софонии", "Софоний"], 3),
    book!(37, ["Агг"], "Hag", "Аггей", ["Аггей", "Аггея"], 2),
    book!(38, ["Зах"], "Zech", "Захария", ["Захария", "Захарии"], 14),
    book!(39, ["Мал"], "Mal", "Малахия", ["Малахия", "Малахии"], 4),
    // New Testament
    book!(40, ["Мф"], "Matt", "Евангелие от Матфея", ["Матфей", "Матфея", "Евангелие от Матфея"], 28),
    book!(41, ["Мк"], "Mark", "Евангелие от Марка", ["Марк", "Марка", "Евангелие от Марка"], 16),
    book!(42, ["Лк"], "Luke", "Евангелие от Луки", ["Лука", "Луки", "Евангелие от Луки"], 24),
    book!(43, ["Ин"], "John", "Евангелие от Иоанна", ["Иоанн", "Иоанна", "Евангелие от Иоанна"], 21),
    book!(44, ["Деян"], "Acts", "Деяния апостолов", ["Деяния", "Деяния апостолов"], 28),
    book!(45, ["Иак"], "Jas", "Послание Иакова", ["Иаков", "Иакова", "Яков", "Послание Иакова"], 5),
    book!(46, ["1Пет"], "1Pet", "Первое послание Петра", ["1 Петра", "1 послание Петра", "Первое послание Петра"], 5),
    book!(47, ["2Пет"], "2Pet", "Второе послание Петра", ["2 Петра", "2 послание Петра", "Второе послание Петра"], 3),
    book!(48, ["1Ин"], "1John", "Первое послание Иоанна", ["1 Иоанна", "Первое послание Иоанна"], 5),
    book!(49, ["2Ин"], "2John", "Второе послание Иоанна", ["2 Иоанна", "Второе послание Иоанна"], 1),
    book!(50, ["3Ин"], "3John", "Третье послание Иоанна", ["3 Иоанна", "Третье послание Иоанна"], 1),
    book!(51, ["Иуд"], "Jude", "Послание Иуды", ["Иуда", "Иуды", "Послание Иуды"], 1),
    book!(52, ["Рим"], "Rom", "Послание к Римлянам", ["Римлянам", "Послание к Римлянам"], 16),
    book!(53, ["1Кор"], "1Cor", "Первое послание к Коринфянам", ["1 Коринфянам", "Первое послание к Коринфянам"], 16),
    book!(54, ["2Кор"], "2Cor", "Второе послание к Коринфянам", ["2 Коринфянам", "Второе послание к Коринфянам"], 13),
    book!(55, ["Гал"], "Gal", "Послание к Галатам", ["Галатам", "Послание к Галатам"], 6),
    book!(56, ["Еф"], "Eph", "Послание к Ефесянам", ["Ефесянам", "Послание к Ефесянам"], 6),
    book!(57, ["Флп"], "Phil", "Послание к Филиппийцам", ["Филиппийцам", "Филиппийцы", "Послание к Филиппийцам"], 4),
    book!(58, ["Кол"], "Col", "Послание к Колоссянам", ["Колоссянам", "Послание к Колоссянам"], 4),
    book!(59, ["1Фес"], "1Thess", "Первое послание к Фессалоникийцам", ["1 Фессалоникийцам", "Первое послание к Фессалоникийцам"], 5),
    book!(60, ["2Фес"], "2Thess", "Второе послание к Фессалоникийцам", ["2 Фессалоникийцам", "Второе послание к Фессалоникийцам"], 3),
    book!(61, ["1Тим"], "1Tim", "Первое послание к Тимофею", ["1 Тимофею", "Первое послание к Тимофею"], 6),
    book!(62, ["2Тим"], "2Tim", "Второе послание к Тимофею", ["2 Тимофею", "Второе послание к Тимофею"], 4),
    book!(63, ["Тит"], "Titus", "Послание к Титу", ["Титу", "Послание к Титу"], 3),
    book!(64, ["Флм"], "Phlm", "Послание к Филимону", ["Филимону", "Послание к Филимону"], 1),
    book!(65, ["Евр"], "Heb", "Послание к Евреям", ["Евреям", "Послание к Евреям"], 13),
    book!(66, ["Откр"], "Rev", "Откровение", ["Откровение", "Откровения", "Откровение Иоанна", "Апокалипсис"], 22),
];
