pub struct CreateLoanDto {
    pub borrower: String,
    pub book_id: String,
    pub weeks: i64,
}
