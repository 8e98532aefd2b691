use std::{cell::RefCell, rc::Rc};

use anchor_lang::{prelude::*, InstructionData, ToAccountMetas};
use anchor_spl::token::{
    spl_token::{
        self,
        instruction::{initialize_account, initialize_mint, mint_to},
    },
    Mint, TokenAccount,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    instruction::Instruction, signature::Keypair, signer::Signer,
    system_instruction::create_account, system_program, sysvar, transaction::Transaction,
};
use staking::{
    constants::*,
    instructions::InitConfigParams,
    state::{PositionData, VestingSchedule},
};

pub type TxResult = std::result::Result<(), BanksClientError>;

pub const MINT_DECIMALS: u8 = 6;
/// Tokens minted to every stake account owner
pub const OWNER_FUNDING: u64 = 1_000;

macro_rules! assert_custom_error {
    ($error:expr, $matcher:expr) => {
        match $error {
            solana_program_test::BanksClientError::TransactionError(
                solana_sdk::transaction::TransactionError::InstructionError(
                    _,
                    solana_sdk::instruction::InstructionError::Custom(n),
                ),
            ) => {
                assert_eq!(n, anchor_lang::error::ERROR_CODE_OFFSET + $matcher as u32)
            }
            err => panic!("expected a custom program error, got {:?}", err),
        }
    };
}

pub fn staking_entry(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> std::result::Result<(), ProgramError> {
    staking::entry(program_id, unsafe { core::mem::transmute(accounts) }, data)
}

/// Addresses of one stake account and the wallet that owns it
pub struct StakeAccountFixture {
    pub owner: Keypair,
    pub owner_tokens: Pubkey,
    pub positions: Pubkey,
    pub metadata: Pubkey,
    pub custody: Pubkey,
    pub custody_authority: Pubkey,
}

impl StakeAccountFixture {
    fn derive(owner: Keypair, owner_tokens: Pubkey, positions: Pubkey) -> Self {
        let pda = |seed: &[u8]| Pubkey::find_program_address(&[seed, positions.as_ref()], &staking::ID).0;
        StakeAccountFixture {
            owner,
            owner_tokens,
            positions,
            metadata: pda(STAKE_ACCOUNT_METADATA_SEED),
            custody: pda(CUSTODY_SEED),
            custody_authority: pda(AUTHORITY_SEED),
        }
    }
}

pub struct TestFixture {
    pub context: Rc<RefCell<ProgramTestContext>>,
    pub mint: Pubkey,
    pub config: Pubkey,
}

impl TestFixture {
    /// Starts the program with an initialized config governed by the payer, an asset mint
    /// whose authority is the payer, and the clock at unix time 0
    pub async fn new() -> TestFixture {
        let program = ProgramTest::new("staking", staking::ID, processor!(staking_entry));
        let context = Rc::new(RefCell::new(program.start_with_context().await));

        {
            let mut ctx = context.borrow_mut();
            let mut clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
            clock.unix_timestamp = 0;
            ctx.set_sysvar(&clock);
        }

        let mut test_f = TestFixture {
            context,
            mint: Pubkey::default(),
            config: Pubkey::find_program_address(&[CONFIG_SEED], &staking::ID).0,
        };
        test_f.mint = test_f.create_mint().await;

        let init_ix = test_f.init_config_ix(InitConfigParams {
            governance_authority: test_f.payer(),
            asset_mint: test_f.mint,
            unlocking_duration: DEFAULT_UNLOCKING_DURATION,
            epoch_duration: DEFAULT_EPOCH_DURATION,
        });
        test_f.process(&[init_ix], &[]).await.unwrap();

        test_f
    }

    pub fn payer(&self) -> Pubkey {
        self.context.borrow().payer.pubkey()
    }

    /// Signs with the payer plus `signers` and submits
    pub async fn process(&self, instructions: &[Instruction], signers: &[&Keypair]) -> TxResult {
        let mut ctx = self.context.borrow_mut();
        let tx = {
            let mut all_signers = vec![&ctx.payer];
            all_signers.extend_from_slice(signers);
            Transaction::new_signed_with_payer(
                instructions,
                Some(&ctx.payer.pubkey()),
                &all_signers,
                ctx.last_blockhash,
            )
        };

        ctx.banks_client.process_transaction(tx).await
    }

    pub fn set_time(&self, timestamp: i64) {
        let clock = Clock {
            unix_timestamp: timestamp,
            ..Default::default()
        };
        self.context.borrow_mut().set_sysvar(&clock);
    }

    pub async fn load_and_deserialize<T: AccountDeserialize>(&self, address: &Pubkey) -> T {
        let account = self
            .context
            .borrow_mut()
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();

        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn balance(&self, token_account: &Pubkey) -> u64 {
        self.load_and_deserialize::<TokenAccount>(token_account)
            .await
            .amount
    }

    /// Copies the ledger out of the account data, past the discriminator
    pub async fn load_positions(&self, account: &StakeAccountFixture) -> PositionData {
        let data = self
            .context
            .borrow_mut()
            .banks_client
            .get_account(account.positions)
            .await
            .unwrap()
            .unwrap()
            .data;

        bytemuck::pod_read_unaligned(&data[DISCRIMINATOR_SIZE..POSITIONS_ACCOUNT_SIZE])
    }

    // ============ SPL ============

    pub async fn create_mint(&self) -> Pubkey {
        let keypair = Keypair::new();
        let payer = self.payer();
        let rent = self.context.borrow_mut().banks_client.get_rent().await.unwrap();

        let init_account_ix = create_account(
            &payer,
            &keypair.pubkey(),
            rent.minimum_balance(Mint::LEN),
            Mint::LEN as u64,
            &spl_token::id(),
        );
        let init_mint_ix = initialize_mint(
            &spl_token::id(),
            &keypair.pubkey(),
            &payer,
            None,
            MINT_DECIMALS,
        )
        .unwrap();

        self.process(&[init_account_ix, init_mint_ix], &[&keypair])
            .await
            .unwrap();

        keypair.pubkey()
    }

    /// New token account of `mint` owned by `owner`, funded with `amount` base units
    pub async fn create_token_account(&self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Pubkey {
        let keypair = Keypair::new();
        let payer = self.payer();
        let rent = self.context.borrow_mut().banks_client.get_rent().await.unwrap();

        let mut ixs = vec![
            create_account(
                &payer,
                &keypair.pubkey(),
                rent.minimum_balance(TokenAccount::LEN),
                TokenAccount::LEN as u64,
                &spl_token::id(),
            ),
            initialize_account(&spl_token::id(), &keypair.pubkey(), mint, owner).unwrap(),
        ];
        if amount > 0 {
            ixs.push(
                mint_to(&spl_token::id(), mint, &keypair.pubkey(), &payer, &[&payer], amount)
                    .unwrap(),
            );
        }

        self.process(&ixs, &[&keypair]).await.unwrap();

        keypair.pubkey()
    }

    // ============ Configuration ============

    pub fn init_config_ix(&self, params: InitConfigParams) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::InitConfig {
                payer: self.payer(),
                config_account: self.config,
                system_program: system_program::id(),
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::InitConfig { params }.data(),
        }
    }

    pub fn update_config_ix(
        &self,
        governance_authority: Pubkey,
        new_governance_authority: Option<Pubkey>,
        new_unlocking_duration: Option<u8>,
    ) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::UpdateConfig {
                governance_authority,
                config: self.config,
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::UpdateConfig {
                new_governance_authority,
                new_unlocking_duration,
            }
            .data(),
        }
    }

    // ============ Stake Account ============

    /// Allocates a position buffer and sets up a stake account for a fresh owner
    /// holding `OWNER_FUNDING` tokens of `mint`
    pub async fn try_create_stake_account_with_mint(
        &self,
        lock: VestingSchedule,
        mint: Pubkey,
    ) -> std::result::Result<StakeAccountFixture, BanksClientError> {
        let owner = Keypair::new();
        let owner_tokens = self
            .create_token_account(&mint, &owner.pubkey(), OWNER_FUNDING)
            .await;
        let positions = Keypair::new();
        let account = StakeAccountFixture::derive(owner, owner_tokens, positions.pubkey());

        let payer = self.payer();
        let rent = self.context.borrow_mut().banks_client.get_rent().await.unwrap();

        let alloc_ix = create_account(
            &payer,
            &positions.pubkey(),
            rent.minimum_balance(POSITIONS_ACCOUNT_SIZE),
            POSITIONS_ACCOUNT_SIZE as u64,
            &staking::ID,
        );
        let create_ix = Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::CreateStakeAccount {
                payer,
                stake_account_positions: account.positions,
                stake_account_metadata: account.metadata,
                stake_account_custody: account.custody,
                custody_authority: account.custody_authority,
                config: self.config,
                mint,
                rent: sysvar::rent::id(),
                token_program: spl_token::id(),
                system_program: system_program::id(),
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::CreateStakeAccount {
                owner: account.owner.pubkey(),
                lock,
            }
            .data(),
        };

        self.process(&[alloc_ix, create_ix], &[&positions]).await?;

        Ok(account)
    }

    pub async fn create_stake_account(&self, lock: VestingSchedule) -> StakeAccountFixture {
        self.try_create_stake_account_with_mint(lock, self.mint)
            .await
            .unwrap()
    }

    pub fn deposit_ix(
        &self,
        account: &StakeAccountFixture,
        signer: Pubkey,
        source: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::Deposit {
                owner: signer,
                source,
                stake_account_positions: account.positions,
                stake_account_metadata: account.metadata,
                stake_account_custody: account.custody,
                config: self.config,
                token_program: spl_token::id(),
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::Deposit { amount }.data(),
        }
    }

    pub fn withdraw_ix(
        &self,
        account: &StakeAccountFixture,
        signer: Pubkey,
        destination: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::WithdrawStake {
                owner: signer,
                destination,
                stake_account_positions: account.positions,
                stake_account_metadata: account.metadata,
                stake_account_custody: account.custody,
                custody_authority: account.custody_authority,
                config: self.config,
                token_program: spl_token::id(),
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::WithdrawStake { amount }.data(),
        }
    }

    /// Deposit from the owner's funded token account
    pub async fn deposit(&self, account: &StakeAccountFixture, amount: u64) -> TxResult {
        let ix = self.deposit_ix(account, account.owner.pubkey(), account.owner_tokens, amount);
        self.process(&[ix], &[&account.owner]).await
    }

    /// Withdraw back into the owner's token account
    pub async fn withdraw(&self, account: &StakeAccountFixture, amount: u64) -> TxResult {
        let ix = self.withdraw_ix(account, account.owner.pubkey(), account.owner_tokens, amount);
        self.process(&[ix], &[&account.owner]).await
    }

    // ============ Positions ============

    pub fn create_position_ix(
        &self,
        account: &StakeAccountFixture,
        signer: Pubkey,
        product: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::CreatePosition {
                owner: signer,
                stake_account_positions: account.positions,
                stake_account_metadata: account.metadata,
                stake_account_custody: account.custody,
                config: self.config,
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::CreatePosition {
                product,
                publisher: Pubkey::default(),
                amount,
            }
            .data(),
        }
    }

    pub fn close_position_ix(
        &self,
        account: &StakeAccountFixture,
        signer: Pubkey,
        index: u8,
    ) -> Instruction {
        Instruction {
            program_id: staking::ID,
            accounts: staking::accounts::ClosePosition {
                owner: signer,
                stake_account_positions: account.positions,
                stake_account_metadata: account.metadata,
                config: self.config,
            }
            .to_account_metas(Some(true)),
            data: staking::instruction::ClosePosition { index }.data(),
        }
    }

    /// Owner-signed position on a fresh product key, so repeated amounts never collide
    /// into identical transactions
    pub async fn create_position(&self, account: &StakeAccountFixture, amount: u64) -> TxResult {
        let ix = self.create_position_ix(
            account,
            account.owner.pubkey(),
            Pubkey::new_unique(),
            amount,
        );
        self.process(&[ix], &[&account.owner]).await
    }

    pub async fn close_position(&self, account: &StakeAccountFixture, index: u8) -> TxResult {
        let ix = self.close_position_ix(account, account.owner.pubkey(), index);
        self.process(&[ix], &[&account.owner]).await
    }
}
