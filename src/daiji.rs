// 大字 (証書などで改ざんを防ぐために使われる字体)
// 法令上使われる 壱 弐 参 拾 と 零 のみ扱う
pub const DAIJI: [(char, char); 5] = [
    ('零', '〇'),
    ('壱', '一'),
    ('弐', '二'),
    ('参', '三'),
    ('拾', '十'),
];

pub fn daiji_to_common(c: char) -> char {
    DAIJI
        .iter()
        .find(|&&(daiji, _)| daiji == c)
        .map_or(c, |&(_, common)| common)
}

pub fn translate_daiji(s: &str) -> String {
    s.chars().map(daiji_to_common).collect()
}
