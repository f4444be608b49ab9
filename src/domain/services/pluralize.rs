//! # Pluralize
//!
//! Русские формы множественного числа
//!
//! Выбор формы по последним цифрам числа: 1 год, 2 года, 5 лет,
//! с исключением для 11-14.

/// Выбирает форму слова для числа
///
/// * `form1` - форма для 1 (год)
/// * `form2` - форма для 2-4 (года)
/// * `form5` - форма для 0 и 5-20 (лет)
pub fn plural_form<'a>(number: i64, form1: &'a str, form2: &'a str, form5: &'a str) -> &'a str {
    let mod10 = number % 10;
    let mod100 = number % 100;

    if mod10 == 1 && mod100 != 11 {
        form1
    } else if (2..=4).contains(&mod10) && !(10..20).contains(&mod100) {
        form2
    } else {
        form5
    }
}

/// Форма слова «год» для числа
pub fn year_word(number: i64) -> &'static str {
    plural_form(number, "год", "года", "лет")
}
