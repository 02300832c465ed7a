use std::collections::HashSet;

lazy_static! {
    /// Common English words excluded from frequency counting.
    pub static ref STOPWORDS: HashSet<&'static str> = {
        [
            "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
            "any", "are", "aren", "as", "at", "be", "because", "been", "before", "being",
            "below", "between", "both", "but", "by", "can", "cannot", "com", "could",
            "couldn", "did", "didn", "do", "does", "doesn", "doing", "don", "down", "during",
            "each", "else", "ever", "few", "for", "from", "further", "get", "had", "hadn",
            "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself",
            "him", "himself", "his", "how", "http", "if", "in", "into", "is", "isn", "it",
            "its", "itself", "just", "let", "like", "ll", "me", "more", "most", "my",
            "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
            "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "re",
            "same", "shall", "she", "should", "shouldn", "since", "so", "some", "such",
            "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
            "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
            "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where",
            "which", "while", "who", "whom", "why", "with", "won", "would", "wouldn", "www",
            "you", "your", "yours", "yourself", "yourselves",
        ]
        .into_iter()
        .collect()
    };
}
