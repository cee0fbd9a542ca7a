//! Station name -> prefecture, used to disambiguate display names

pub static STATION_PREFECTURES: &[(&str, &str)] = &[
    // 北海道
    ("札幌", "北海道"),
    ("函館", "北海道"),
    ("旭川", "北海道"),
    ("小樽", "北海道"),
    ("釧路", "北海道"),
    ("帯広", "北海道"),
    ("稚内", "北海道"),
    ("網走", "北海道"),
    ("根室", "北海道"),
    ("富良野", "北海道"),
    // 東北
    ("青森", "青森県"),
    ("八戸", "青森県"),
    ("弘前", "青森県"),
    ("盛岡", "岩手県"),
    ("仙台", "宮城県"),
    ("秋田", "秋田県"),
    ("山形", "山形県"),
    ("福島", "福島県"),
    ("郡山", "福島県"),
    ("会津若松", "福島県"),
    // 関東
    ("水戸", "茨城県"),
    ("宇都宮", "栃木県"),
    ("日光", "栃木県"),
    ("前橋", "群馬県"),
    ("高崎", "群馬県"),
    ("大宮", "埼玉県"),
    ("川越", "埼玉県"),
    ("千葉", "千葉県"),
    ("成田", "千葉県"),
    ("東京", "東京都"),
    ("新宿", "東京都"),
    ("渋谷", "東京都"),
    ("池袋", "東京都"),
    ("上野", "東京都"),
    ("横浜", "神奈川県"),
    ("鎌倉", "神奈川県"),
    ("小田原", "神奈川県"),
    // 中部
    ("新潟", "新潟県"),
    ("長岡", "新潟県"),
    ("富山", "富山県"),
    ("金沢", "石川県"),
    ("福井", "福井県"),
    ("甲府", "山梨県"),
    ("長野", "長野県"),
    ("松本", "長野県"),
    ("岐阜", "岐阜県"),
    ("高山", "岐阜県"),
    ("静岡", "静岡県"),
    ("浜松", "静岡県"),
    ("熱海", "静岡県"),
    ("名古屋", "愛知県"),
    ("豊橋", "愛知県"),
    ("津", "三重県"),
    ("伊勢", "三重県"),
    // 関西
    ("大津", "滋賀県"),
    ("彦根", "滋賀県"),
    ("京都", "京都府"),
    ("舞鶴", "京都府"),
    ("大阪", "大阪府"),
    ("なんば", "大阪府"),
    ("堺", "大阪府"),
    ("神戸", "兵庫県"),
    ("姫路", "兵庫県"),
    ("奈良", "奈良県"),
    ("和歌山", "和歌山県"),
    ("白浜", "和歌山県"),
    // 中国
    ("鳥取", "鳥取県"),
    ("米子", "鳥取県"),
    ("松江", "島根県"),
    ("出雲", "島根県"),
    ("岡山", "岡山県"),
    ("倉敷", "岡山県"),
    ("広島", "広島県"),
    ("尾道", "広島県"),
    ("山口", "山口県"),
    ("下関", "山口県"),
    // 四国
    ("徳島", "徳島県"),
    ("高松", "香川県"),
    ("松山", "愛媛県"),
    ("宇和島", "愛媛県"),
    ("高知", "高知県"),
    // 九州・沖縄
    ("博多", "福岡県"),
    ("小倉", "福岡県"),
    ("佐賀", "佐賀県"),
    ("長崎", "長崎県"),
    ("佐世保", "長崎県"),
    ("熊本", "熊本県"),
    ("大分", "大分県"),
    ("別府", "大分県"),
    ("宮崎", "宮崎県"),
    ("鹿児島", "鹿児島県"),
    ("那覇", "沖縄県"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_station_names_are_unique() {
        let names: HashSet<_> = STATION_PREFECTURES.iter().map(|(s, _)| *s).collect();
        assert_eq!(names.len(), STATION_PREFECTURES.len());
    }

    #[test]
    fn test_prefectures_carry_suffix() {
        for (station, prefecture) in STATION_PREFECTURES {
            assert!(
                ["都", "道", "府", "県"].iter().any(|s| prefecture.ends_with(s)),
                "{} -> {}",
                station,
                prefecture
            );
        }
    }
}
