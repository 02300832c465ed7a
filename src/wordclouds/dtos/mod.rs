pub mod generate_wordcloud_dto;
