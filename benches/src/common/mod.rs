/// Generate a replay script with `num_accounts` accounts and `num_operations`
/// operations spread over them: mostly deposits, some withdrawals (a few of
/// which overdraw and get rejected) and transfers to the next account.
pub fn generate_script(num_accounts: i32, num_operations: usize) -> String {
    let mut csv = String::from("type,account,amount,target,name,address,phone\n");

    for number in 1..=num_accounts {
        csv.push_str(&format!("open,{number},100,,Customer {number},,\n"));
    }

    for i in 0..num_operations {
        let number = (i as i32 % num_accounts) + 1;
        let amount = format!("{}.{:02}", (i % 500) + 1, i % 100);

        match i % 10 {
            0..=5 => csv.push_str(&format!("deposit,{number},{amount},,,,\n")),
            6..=8 => csv.push_str(&format!("withdraw,{number},{amount},,,,\n")),
            _ => {
                let target = (number % num_accounts) + 1;
                csv.push_str(&format!("transfer,{number},{amount},{target},,,\n"));
            }
        }
    }

    csv
}
