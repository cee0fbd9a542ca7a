//! Built-in card categories for browsing

/// A category as compiled into the binary
#[derive(Debug, Clone)]
pub struct CategoryTable {
    pub name: &'static str,
    pub icon: Option<&'static str>,
    pub cards: &'static [&'static str],
}

pub static EXPRESS: CategoryTable = CategoryTable {
    name: "急行系",
    icon: None,
    cards: &[
        "229マスカード",
        "リニア周遊カード",
        "はやぶさ周遊カード",
        "のぞみ周遊カード",
        "新幹線周遊カード",
        "特急周遊カード",
        "リニアカード",
        "急行周遊カード",
        "はやぶさカード",
    ],
};

pub static MOVEMENT: CategoryTable = CategoryTable {
    name: "移動系",
    icon: None,
    cards: &[
        "強奪飛び周遊カード",
        "☆飛び周遊カード",
        "物件飛び周遊カード",
        "スペシャルズカード",
        "目的地の近くカード",
        "ヘリポートカード",
        "スペシャルカード",
        "強奪飛びカード",
        "☆飛びカード",
        "物件飛びカード",
        "銀河鉄道カード",
        "千載一遇カード",
        "オール6カード",
        "テレポートカード",
        "ぶっとび周遊カード",
        "里帰りカード",
        "ぴったりカード",
        "ブックマークカード",
        "猪突猛進カード",
    ],
};

pub static MONEY: CategoryTable = CategoryTable {
    name: "お金系",
    icon: None,
    cards: &[
        "坊主丸儲けカード",
        "ダイヤモンドカード",
        "ベビキュラーカード",
        "虎につばさカード",
        "たいらのまさカード",
        "とっかえっこカード",
        "10億円カード",
        "お殿様カード",
        "親の総取りカード",
        "持ち金ゼロカード",
        "エンジェルカード",
        "連帯保証人カード",
    ],
};

pub static PROPERTY: CategoryTable = CategoryTable {
    name: "物件系",
    icon: None,
    cards: &[
        "シンデレラカード",
        "強奪飛び周遊カード",
        "プラチナカード",
        "ゴールドカード",
        "物件飛び周遊カード",
        "強奪飛びカード",
        "乗っ取り周遊カード",
        "シルバーカード",
        "物件飛びカード",
        "乗っ取りカード",
    ],
};

pub static UTILITY: CategoryTable = CategoryTable {
    name: "便利系",
    icon: None,
    cards: &[
        "ダビングカード",
        "パトカーズ",
        "パトカード",
        "期間延長カード",
        "絶好調カード",
        "君がすべて！カード",
        "福袋カード",
        "シュレッダーカード",
        "あっちいけカード",
        "九死に一生カード",
        "ラッセル車カード",
        "最下位カード",
        "へっちゃらカード",
        "引換券カード",
    ],
};

pub static ATTACK: CategoryTable = CategoryTable {
    name: "攻撃系",
    icon: None,
    cards: &[
        "坊主丸儲けカード",
        "刀狩りカード",
        "牛歩カード",
        "キングに！カード",
        "豪速球カード",
        "冬眠カード",
        "強奪飛び周遊カード",
        "親の総取りカード",
        "いただきますカード",
        "強奪飛びカード",
        "乗っ取り周遊カード",
        "最果てカード",
        "周遊禁止カード",
        "サミットカード",
        "場所がえカード",
        "とっかえっこカード",
        "ベビキュラーカード",
        "とびちりカード",
        "乗っ取りカード",
        "孤軍奮闘カード",
        "オナラカード",
        "指定うんち！カード",
        "スリの銀次カード",
        "苦しゅうないカード",
        "ふういんカード",
        "目的地変更カード",
    ],
};

/// All built-in categories in display order
pub static ALL_CATEGORIES: &[&CategoryTable] =
    &[&EXPRESS, &MOVEMENT, &MONEY, &PROPERTY, &UTILITY, &ATTACK];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_names_are_unique() {
        let names: HashSet<_> = ALL_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), ALL_CATEGORIES.len());
    }

    #[test]
    fn test_no_duplicate_cards_within_category() {
        for category in ALL_CATEGORIES {
            let cards: HashSet<_> = category.cards.iter().collect();
            assert_eq!(cards.len(), category.cards.len(), "{}", category.name);
        }
    }
}
